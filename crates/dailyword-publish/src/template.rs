use chrono::NaiveDateTime;
use dailyword_core::WordRecord;

use crate::render::render;

const TITLE: &str = "# 📚 今日の言葉 - Daily Word";

const INTRO: &str =
    "毎日新しい言葉を学びましょう！世界中の様々な言語から、その日の特別な言葉をお届けします。";

const GUIDE: &str = r#"## 📝 使い方

1. `data/words.csv` ファイルに学習したい言葉を追加してください
2. GitHub Actionsが毎日自動的にREADME.mdを更新します
3. 毎日違う言葉が表示されます

## 📊 CSVファイルの形式

```csv
言葉,話されている国（国旗）,日本語読み,日本語の意味
Hello,🇺🇸 English (アメリカ),ハロー,こんにちは
Bonjour,🇫🇷 French (フランス),ボンジュール,こんにちは
Hola,🇪🇸 Spanish (スペイン),オラ,こんにちは
Guten Tag,🇩🇪 German (ドイツ),グーテン・ターク,こんにちは
Ciao,🇮🇹 Italian (イタリア),チャオ,こんにちは / さようなら
안녕하세요,🇰🇷 Korean (韓国),アンニョンハセヨ,こんにちは
你好,🇨🇳 Chinese (中国),ニーハオ,こんにちは
Привет,🇷🇺 Russian (ロシア),プリヴィエット,こんにちは
```

## ⚙️ セットアップ

1. このリポジトリをフォークまたはクローン
2. `data/words.csv` ファイルを作成し、学習したい言葉を追加
3. GitHub Actionsが自動的に毎日更新します

## 🤖 自動更新

- **更新時間**: 毎日 09:00 JST
- **更新方法**: GitHub Actions による自動コミット
- **同じ日なら同じ言葉**: 日付ベースのシード値を使用"#;

const FOOTER: &str = "*This README is automatically updated daily by GitHub Actions* 🚀";

/// Render the whole host document around the daily block.
///
/// `now` supplies both the block's date and the last-updated stamp.
pub fn render_document(record: Option<&WordRecord>, now: NaiveDateTime) -> String {
    let block = render(record, now.date());
    let stamp = now.format("%Y-%m-%d %H:%M:%S");
    format!(
        "{TITLE}\n\n{INTRO}\n\n{block}\n\n{GUIDE}\n\n---\n\n*最終更新: {stamp} JST*\n\n{FOOTER}\n"
    )
}
