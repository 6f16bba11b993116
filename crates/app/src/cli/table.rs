use tabled::{
    builder::Builder,
    settings::{Style, Theme},
};

/// Render rows under a header as a rounded table.
pub(crate) fn render<const N: usize>(
    header: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
) -> String {
    let mut builder = Builder::default();

    builder.push_record(header);

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));

    table.to_string()
}

/// Print a table, or `empty` when there is nothing to show.
pub(crate) fn print<const N: usize>(
    header: [&str; N],
    rows: Vec<[String; N]>,
    empty: &str,
) {
    if rows.is_empty() {
        println!("{empty}");
        return;
    }

    println!("{}", render(header, rows));
}
