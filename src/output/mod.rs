mod styling;
mod summary;
mod tables;

pub use styling::{dim, magenta_bold};
pub use summary::{print_dashboard, print_empty_warning, print_refresh_tick, print_run_error};

/// Prints the `CRMLens` banner to stderr.
///
/// Displays the tool name, version, and description at the start of execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("📈 CRMLens"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("CRM Sales Insights Tool")
    );
}
