use textgrid::{ConfigError, RenderConfig, TableBuilder};

fn inventory() -> textgrid::Table {
    TableBuilder::new()
        .add_row(["item", "count"])
        .add_row(["bolts", "40"])
        .add_row(["nuts", "2"])
        .title("Stock")
        .build()
        .unwrap()
}

#[test]
fn yaml_config_drives_render() {
    let config = RenderConfig::from_yaml(
        r#"
line_style: box_drawing
horizontal_rules: every_row
title_position: bottom
"#,
    )
    .unwrap();

    let lines: Vec<String> = inventory().render_lines(&config.into_options()).collect();
    assert_eq!(
        lines,
        vec![
            "┌───────┬───────┐",
            "│ item  │ count │",
            "├───────┼───────┤",
            "│ bolts │ 40    │",
            "├───────┼───────┤",
            "│ nuts  │ 2     │",
            "└───────┴───────┘",
            "      Stock      ",
        ]
    );
}

#[test]
fn json_config_matches_yaml_config() {
    let yaml = RenderConfig::from_yaml("column_width: 3\nhide_title: true\n").unwrap();
    let json = RenderConfig::from_json(r#"{"column_width": 3, "hide_title": true}"#).unwrap();
    assert_eq!(yaml, json);

    let table = inventory();
    let output = table.render_with_options(&json.into_options());
    assert_eq!(
        output,
        "+-----+-----+\n\
         | ite | cou |\n\
         +-----+-----+\n\
         | bol | 40  |\n\
         | nut | 2   |\n\
         +-----+-----+"
    );
}

#[test]
fn column_width_beats_table_width() {
    let config = RenderConfig::from_yaml("table_width: 60\ncolumn_width: 2\n").unwrap();
    let output = inventory().render_with_options(&config.into_options());
    assert!(output.lines().skip(1).all(|line| line.chars().count() == 11));
}

#[test]
fn malformed_config_is_an_error() {
    assert!(matches!(
        RenderConfig::from_yaml("line_style: [nope"),
        Err(ConfigError::Yaml(_))
    ));
    assert!(matches!(
        RenderConfig::from_json("{\"table_width\": -1}"),
        Err(ConfigError::Json(_))
    ));
}
