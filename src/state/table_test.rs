use super::*;

fn bookings() -> TableModel {
    TableModel::new(
        vec![TableRow::new(["Customer", "Pickup", "Fare"])],
        vec![
            TableRow::new(["priya", "Andheri", "450.00"]),
            TableRow::new(["Arjun", "Bandra", "120.50"]),
            TableRow::new(["meera", "Colaba", "999.00"]),
            TableRow::new(["Arjun", "Dadar", "80.00"]),
            TableRow::new(["Zoya", "Worli", "300.00"]),
        ],
    )
}

fn column(model: &TableModel, column: usize) -> Vec<&str> {
    model.body.iter().map(|r| r.cell(column)).collect()
}

// =============================================================
// locale_cmp
// =============================================================

#[test]
fn locale_cmp_ignores_case_first() {
    assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_cmp("Zoya", "meera"), Ordering::Greater);
}

#[test]
fn locale_cmp_puts_lowercase_before_uppercase_on_ties() {
    assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    assert_eq!(locale_cmp("A", "a"), Ordering::Greater);
    assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
}

// =============================================================
// Sort
// =============================================================

#[test]
fn sort_orders_body_ascending_case_insensitively() {
    let mut model = bookings();
    model.sort_by_column(0);
    assert_eq!(column(&model, 0), vec!["Arjun", "Arjun", "meera", "priya", "Zoya"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut model = bookings();
    model.sort_by_column(0);
    assert_eq!(model.body[0].cell(1), "Bandra");
    assert_eq!(model.body[1].cell(1), "Dadar");
}

#[test]
fn sort_is_idempotent() {
    let mut once = bookings();
    once.sort_by_column(2);
    let mut twice = once.clone();
    twice.sort_by_column(2);
    assert_eq!(once, twice);
}

#[test]
fn sort_is_textual_not_numeric() {
    let mut model = bookings();
    model.sort_by_column(2);
    assert_eq!(column(&model, 2), vec!["120.50", "300.00", "450.00", "80.00", "999.00"]);
}

#[test]
fn sort_never_touches_header() {
    let mut model = bookings();
    model.sort_by_column(1);
    assert_eq!(model.head[0].cell(0), "Customer");
}

#[test]
fn sort_treats_missing_cells_as_empty() {
    let mut model = TableModel::new(
        Vec::new(),
        vec![TableRow::new(["b", "x"]), TableRow::new(["a"]), TableRow::new(["c", "y"])],
    );
    model.sort_by_column(1);
    assert_eq!(column(&model, 0), vec!["a", "b", "c"]);
}

#[test]
fn sort_order_matches_sort_by_column() {
    let model = bookings();
    let order = model.sort_order(1);
    let mut sorted = model.clone();
    sorted.sort_by_column(1);
    let via_order: Vec<_> = order.iter().map(|&i| model.body[i].clone()).collect();
    assert_eq!(via_order, sorted.body);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn filter_is_case_insensitive_substring() {
    let mut model = bookings();
    let summary = model.filter("arj");
    assert_eq!(summary, FilterSummary { shown: 2, hidden: 3 });
    assert!(model.visible_body().all(|r| r.cell(0) == "Arjun"));
}

#[test]
fn filter_partitions_rows_by_containment() {
    for query in ["a", "DA", "0.0", "xyz", ""] {
        let mut model = bookings();
        model.filter(query);
        for row in &model.body {
            let contains = row.text.to_uppercase().contains(&query.to_uppercase());
            assert_eq!(!row.hidden, contains, "query {query:?} row {:?}", row.text);
        }
    }
}

#[test]
fn filter_with_empty_query_shows_everything() {
    let mut model = bookings();
    model.filter("zzz");
    let summary = model.filter("");
    assert_eq!(summary, FilterSummary { shown: 5, hidden: 0 });
}

#[test]
fn filter_matches_across_full_row_text() {
    let row = TableRow::with_text(vec!["Arjun".into(), "Bandra".into()], "\n  Arjun\n  Bandra\n".into());
    assert!(row.matches("bandra"));
    assert!(!row.matches("colaba"));
}

// =============================================================
// CSV export
// =============================================================

#[test]
fn csv_plain_joins_cells_and_lines() {
    let model = TableModel::new(
        vec![TableRow::new(["Name", "Fare"])],
        vec![TableRow::new(["Arjun", "120.50"]), TableRow::new(["Zoya", "300.00"])],
    );
    assert_eq!(model.to_csv(CsvMode::Plain).unwrap(), "Name,Fare\nArjun,120.50\nZoya,300.00");
}

#[test]
fn csv_quoted_matches_plain_for_clean_cells() {
    let model = bookings();
    assert_eq!(model.to_csv(CsvMode::Quoted).unwrap(), model.to_csv(CsvMode::Plain).unwrap());
}

#[test]
fn csv_quoted_escapes_commas_quotes_and_newlines() {
    let model = TableModel::new(
        Vec::new(),
        vec![TableRow::new(["Sharma, R.", "said \"hi\"", "line\nbreak"])],
    );
    assert_eq!(
        model.to_csv(CsvMode::Quoted).unwrap(),
        "\"Sharma, R.\",\"said \"\"hi\"\"\",\"line\nbreak\""
    );
}

#[test]
fn csv_plain_keeps_legacy_unescaped_output() {
    let model = TableModel::new(Vec::new(), vec![TableRow::new(["Sharma, R.", "5"])]);
    assert_eq!(model.to_csv(CsvMode::Plain).unwrap(), "Sharma, R.,5");
}

#[test]
fn csv_includes_footer_and_hidden_rows() {
    let mut model = bookings();
    model.foot.push(TableRow::new(["Total", "", "1949.50"]));
    model.filter("zoya");
    let csv = model.to_csv(CsvMode::Plain).unwrap();
    assert_eq!(csv.lines().count(), 7);
    assert!(csv.ends_with("Total,,1949.50"));
}

#[test]
fn csv_of_empty_table_is_empty() {
    assert_eq!(TableModel::default().to_csv(CsvMode::Quoted).unwrap(), "");
}

#[test]
fn csv_mode_default_is_quoted() {
    assert_eq!(CsvMode::default(), CsvMode::Quoted);
}
