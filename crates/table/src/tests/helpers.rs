use record::MONTHS;

/// One record line whose January..December amounts are `amounts`.
pub fn line(series: &str, ry: i32, rm: i32, iy: i32, amounts: [&str; MONTHS]) -> String {
    format!("{series}{ry:04}{rm:02}{iy:04}{}", amounts.concat())
}

/// Record line with the same amount in every issue month.
pub fn uniform(series: &str, ry: i32, rm: i32, iy: i32, amount: &str) -> String {
    line(series, ry, rm, iy, [amount; MONTHS])
}

/// Joins lines into newline-terminated file contents.
pub fn file_body(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
