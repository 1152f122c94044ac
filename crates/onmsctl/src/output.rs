//! Output formatting: table, JSON, YAML, plain.
//!
//! Lists render as an aligned `tabled` table and single items as a YAML
//! document unless `--output` asks for something else. Everything is
//! rendered into a `String` first and printed in one write, so a failure
//! never leaves half a table on the terminal.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: one aligned row per item via the `Tabled` derive
/// - `json` / `json-compact` / `yaml`: the original data via serde
/// - `plain`: `id_fn` on each item, one identifier per line
///
/// An empty list prints `empty_message` instead of a bare header in `table`
/// and `plain` mode; structured formats still emit the empty collection.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    empty_message: &str,
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table | OutputFormat::Plain if data.is_empty() => Ok(empty_message.into()),
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Detail views have no table form: `table` falls back to YAML.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table | OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::blank()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use onmsctl_core::{Parameter, Policy};

    use super::*;

    #[derive(Tabled)]
    struct PolicyRow {
        #[tabled(rename = "Policy Name")]
        name: String,
        #[tabled(rename = "Policy Class")]
        class: String,
    }

    fn policies() -> Vec<Policy> {
        vec![Policy {
            name: "Production".into(),
            class: "org.opennms.netmgt.provision.persist.policies.NodeCategorySettingPolicy"
                .into(),
            parameters: vec![Parameter {
                key: "category".into(),
                value: "Production".into(),
            }],
        }]
    }

    fn row(p: &Policy) -> PolicyRow {
        PolicyRow {
            name: p.name.clone(),
            class: p.class.clone(),
        }
    }

    #[test]
    fn table_has_header_and_one_row_per_item() {
        let out = render_list(
            &OutputFormat::Table,
            &policies(),
            "There are no policies",
            row,
            |p| p.name.clone(),
        )
        .unwrap();

        insta::assert_snapshot!(out, @r"
         Policy Name   Policy Class
         Production    org.opennms.netmgt.provision.persist.policies.NodeCategorySettingPolicy
        ");
    }

    #[test]
    fn empty_list_prints_message_without_header() {
        let out = render_list(
            &OutputFormat::Table,
            &Vec::<Policy>::new(),
            "There are no policies on the chosen foreign source definition",
            row,
            |p| p.name.clone(),
        )
        .unwrap();

        assert_eq!(
            out,
            "There are no policies on the chosen foreign source definition"
        );
    }

    #[test]
    fn empty_list_in_json_is_an_empty_array() {
        let out = render_list(
            &OutputFormat::JsonCompact,
            &Vec::<Policy>::new(),
            "There are no policies",
            row,
            |p| p.name.clone(),
        )
        .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn detail_defaults_to_yaml() {
        let policy = &policies()[0];
        let out = render_single(&OutputFormat::Table, policy, |p| p.name.clone()).unwrap();

        insta::assert_snapshot!(out, @r"
        name: Production
        class: org.opennms.netmgt.provision.persist.policies.NodeCategorySettingPolicy
        parameter:
        - key: category
          value: Production
        ");
    }

    #[test]
    fn plain_emits_identifiers() {
        let out = render_list(&OutputFormat::Plain, &policies(), "", row, |p| p.name.clone())
            .unwrap();
        assert_eq!(out, "Production");
    }
}
