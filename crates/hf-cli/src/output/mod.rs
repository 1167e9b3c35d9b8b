use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

const EMPTY: &str = "(nothing found)";
const MISSING: &str = "-";

/// Format a command response. JSON modes serialize as-is; `table` goes through [`Grid`].
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Table => {
            let prefs = ui::prefs();
            render_table(
                value,
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            )?
        }
    };
    Ok(text)
}

/// [`render`] to stdout.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let text = match Grid::from_value(serde_json::to_value(value)?) {
        Shape::Empty => EMPTY.to_string(),
        Shape::Bare(cell) => cell,
        Shape::Grid(grid) => {
            let headers: Vec<&str> = grid.headers.iter().map(String::as_str).collect();
            table::render_entity_table(&headers, &grid.rows, options)
        }
    };
    Ok(text)
}

/// A response flattened into string cells.
struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

enum Shape {
    Empty,
    Bare(String),
    Grid(Grid),
}

impl Grid {
    /// Objects become `field | value` pairs. Arrays of objects get one row per
    /// item over the union of their keys, first-seen order.
    fn from_value(value: Value) -> Shape {
        match value {
            Value::Array(items) if items.is_empty() => Shape::Empty,
            Value::Array(items) => Shape::Grid(Self::from_items(&items)),
            Value::Object(map) => Shape::Grid(Self {
                headers: vec!["field".to_string(), "value".to_string()],
                rows: map
                    .into_iter()
                    .map(|(key, value)| vec![key, cell(&value)])
                    .collect(),
            }),
            scalar => Shape::Bare(cell(&scalar)),
        }
    }

    fn from_items(items: &[Value]) -> Self {
        let objects: Vec<&Map<String, Value>> = items.iter().filter_map(Value::as_object).collect();
        if objects.len() != items.len() {
            return Self {
                headers: vec!["value".to_string()],
                rows: items.iter().map(|item| vec![cell(item)]).collect(),
            };
        }

        let mut headers: Vec<String> = Vec::new();
        for key in objects.iter().flat_map(|object| object.keys()) {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
        let rows = objects
            .iter()
            .map(|object| {
                headers
                    .iter()
                    .map(|key| object.get(key).map_or_else(|| MISSING.to_string(), cell))
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_string(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            parts.join(", ")
        }
        nested => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        city: &'static str,
        specialties: Vec<&'static str>,
    }

    fn row() -> Row {
        Row {
            name: "Joana",
            city: "campinas",
            specialties: vec!["lavadora", "air-fryer"],
        }
    }

    #[test]
    fn json_modes_differ_only_in_layout() {
        let pretty = render(&row(), OutputFormat::Json).expect("json render should work");
        let raw = render(&row(), OutputFormat::Raw).expect("raw render should work");
        assert!(pretty.lines().count() > 1);
        assert_eq!(raw.lines().count(), 1);
        let a: serde_json::Value = serde_json::from_str(&pretty).expect("json should parse");
        let b: serde_json::Value = serde_json::from_str(&raw).expect("raw should parse");
        assert_eq!(a, b);
    }

    #[test]
    fn mixed_array_falls_back_to_a_value_column() {
        let out = render_table(&serde_json::json!([{"a": 1}, "solto"]), PLAIN)
            .expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("value")));
        assert!(out.contains("solto"));
    }

    #[test]
    fn object_table_lists_fields() {
        let out = render_table(&row(), PLAIN).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("lavadora, air-fryer"));
    }

    #[test]
    fn array_table_has_one_line_per_item() {
        let out = render_table(&vec![row(), row()], PLAIN).expect("table render should work");
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_array_says_so() {
        let out = render_table(&Vec::<Row>::new(), PLAIN).expect("table render should work");
        assert_eq!(out, "(nothing found)");
    }

    #[test]
    fn scalar_renders_bare() {
        let out = render_table(&"49.90", PLAIN).expect("table render should work");
        assert_eq!(out, "49.90");
    }
}
