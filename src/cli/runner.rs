//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, ViewArgs};
use crate::config::{load_config, PagerConfig};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{
    Navigation, NavigationRenderer, PageEntry, PageView, PaginationState, Renderer,
};
use crate::search::SearchMode;
use crate::sort::SortDirection;
use crate::types::Record;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        for line in self.render()? {
            println!("{line}");
        }
        Ok(())
    }

    /// Execute the command and return the lines it prints
    pub fn render(&self) -> Result<Vec<String>> {
        match &self.cli.command {
            Commands::View(args) => self.view(args),
        }
    }

    /// Load pager configuration, falling back to defaults
    fn load_config(&self) -> Result<PagerConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(PagerConfig::default()),
        }
    }

    /// Page through a record file
    fn view(&self, args: &ViewArgs) -> Result<Vec<String>> {
        let config = self.load_config()?;
        let records = load_records(&args.data)?;

        let screen = Rc::new(RefCell::new(Screen::default()));
        let writer = PageWriter {
            format: self.cli.format,
            screen: Rc::clone(&screen),
        };
        let bar = NavBar {
            screen: Rc::clone(&screen),
        };

        let mut state = PaginationState::new(config, writer)?.with_navigation(bar);
        state.set_results(records)?;

        if let Some(limit) = args.limit {
            state.set_limit(limit)?;
        }

        // Sorting replaces the pool, so it must run before the search
        if let Some(field) = &args.sort {
            let direction = if args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            state.sort(field, direction)?;
        }

        if let Some(text) = &args.search {
            state.search(text, SearchMode::from_include(!args.exclude))?;
        }

        if let Some(page) = args.page {
            state.go_to_page(page)?;
            if state.page() != page {
                tracing::warn!(
                    "Page {} is past the last page {}, showing page {}",
                    page,
                    state.last_page(),
                    state.page()
                );
            }
        }

        tracing::debug!("Showing page {} of {}", state.page(), state.last_page());

        let screen = screen.take();
        let mut lines = screen.records;
        lines.extend(screen.navigation);
        Ok(lines)
    }
}

/// Load a data file holding a JSON array of records
pub(crate) fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(Error::config(format!(
            "Data file {} must hold a JSON array of records",
            path.display()
        ))),
    }
}

/// Output of the last render
#[derive(Debug, Default)]
struct Screen {
    records: Vec<String>,
    navigation: Option<String>,
}

/// Writes the visible records to the screen
struct PageWriter {
    format: OutputFormat,
    screen: Rc<RefCell<Screen>>,
}

impl Renderer for PageWriter {
    fn render(&mut self, view: &PageView<'_>) -> anyhow::Result<()> {
        let mut lines = Vec::with_capacity(view.records.len());
        for record in view.records {
            let shown = present(view, record);
            let line = match self.format {
                OutputFormat::Json => serde_json::to_string(&shown)?,
                OutputFormat::Pretty => serde_json::to_string_pretty(&shown)?,
            };
            lines.push(line);
        }

        let mut screen = self.screen.borrow_mut();
        screen.records = lines;
        screen.navigation = None;
        Ok(())
    }
}

/// Record with its fields coerced to their configured column types
fn present<'a>(view: &PageView<'a>, record: &'a Record) -> Value {
    match record.as_object() {
        Some(fields) if !view.coercer.is_empty() => {
            let coerced: Map<String, Value> = fields
                .keys()
                .filter_map(|key| {
                    view.value(record, key)
                        .map(|value| (key.clone(), value.into_owned()))
                })
                .collect();
            Value::Object(coerced)
        }
        _ => record.clone(),
    }
}

/// Writes the navigation bar to the screen
struct NavBar {
    screen: Rc<RefCell<Screen>>,
}

impl NavigationRenderer for NavBar {
    fn render_navigation(&mut self, navigation: &Navigation<'_>) -> anyhow::Result<()> {
        self.screen.borrow_mut().navigation = Some(navigation_bar(navigation));
        Ok(())
    }
}

/// One-line navigation bar.
///
/// Page buttons come first, the current page in brackets, followed by a
/// summary of the active data:
///
/// ```text
/// « 1 … 4 5 [6] 7 8 9 … 15 »  150 records, 10 rows per page
/// ```
pub fn navigation_bar(navigation: &Navigation<'_>) -> String {
    let mut buttons = Vec::new();

    if let Some(window) = &navigation.window {
        if window.show_back {
            buttons.push("«".to_string());
        }
        buttons.extend(window.entries.iter().map(|entry| match entry {
            PageEntry::Page {
                number,
                active: true,
            } => format!("[{number}]"),
            PageEntry::Page { number, .. } => number.to_string(),
            PageEntry::Ellipsis => "…".to_string(),
        }));
        if window.show_forward {
            buttons.push("»".to_string());
        }
    }

    let mut summary = format!(
        "{} records, {} per page",
        navigation.total,
        navigation.limit_option_label(navigation.limit)
    );
    if !navigation.search_text.is_empty() {
        summary.push_str(&format!(", search \"{}\"", navigation.search_text));
    }
    if let Some(sort) = navigation.sort {
        summary.push_str(&format!(", sorted by {} {}", sort.field, sort.direction));
    }

    if buttons.is_empty() {
        summary
    } else {
        format!("{}  {}", buttons.join(" "), summary)
    }
}
