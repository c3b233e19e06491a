use chrono::NaiveDate;
use dailyword_core::WordRecord;

const HEADING: &str = "## 🌟 今日の言葉";
const MISSING_LINE: &str =
    "**エラー**: 今日の言葉を取得できませんでした。data/words.csv ファイルを確認してください。";

const WEEKDAYS: [(&str, &str); 7] = [
    ("Monday", "月曜日"),
    ("Tuesday", "火曜日"),
    ("Wednesday", "水曜日"),
    ("Thursday", "木曜日"),
    ("Friday", "金曜日"),
    ("Saturday", "土曜日"),
    ("Sunday", "日曜日"),
];

/// Translate an English weekday name; unknown names are returned unchanged.
pub fn localized_weekday(name: &str) -> &str {
    WEEKDAYS
        .iter()
        .find(|(english, _)| *english == name)
        .map(|(_, local)| *local)
        .unwrap_or(name)
}

/// Render the daily word block for `today`.
///
/// Without a record the word lines are replaced by a fixed error line.
pub fn render(record: Option<&WordRecord>, today: NaiveDate) -> String {
    let weekday = today.format("%A").to_string();
    let date_line = format!(
        "**{} ({})**",
        today.format("%Y年%m月%d日"),
        localized_weekday(&weekday)
    );

    let body = match record {
        Some(record) => format!(
            "<div align=\"center\">\n\n\
             ### {}\n\n\
             **{}**\n\n\
             *{}*\n\n\
             **「{}」**\n\n\
             </div>\n\n\
             ---",
            record.word, record.country, record.pronunciation, record.meaning
        ),
        None => MISSING_LINE.to_string(),
    };

    format!("{HEADING}\n\n{date_line}\n\n{body}")
        .trim_end()
        .to_string()
}
