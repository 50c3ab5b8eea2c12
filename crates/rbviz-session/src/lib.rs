//! Interactive session over a single rbviz tree.
//!
//! A [`Session`] owns one tree, turns [`Command`]s into tree operations,
//! journals each one through a [`Logger`] and answers with the status line a
//! front end shows next to its drawing. A successful search highlights its key
//! until the next mutation.

mod command;

pub use command::{Command, CommandError, parse_key};

use anyhow::{Context, Result};
use rbviz_core::{DeleteOutcome, InsertOutcome, NodeId, RbTree, SearchOutcome};
use rbviz_logging::{Logger, LoggingConfig};
use rbviz_ports::{Key, TreeRenderer};
use rbviz_validate::{TreeReport, TreeValidator};

/// What a command did to (or found in) the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Insert(InsertOutcome),
    Delete(DeleteOutcome),
    Search(SearchOutcome),
    Cleared,
    Rendered(String),
    Checked(TreeReport),
}

/// Answer to one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub command: Command,
    /// One-line status for the user.
    pub status: String,
    pub outcome: Outcome,
    /// Root after the command ran.
    pub root: Option<NodeId>,
}

pub struct Session<'a> {
    tree: RbTree<Key>,
    renderer: &'a dyn TreeRenderer,
    logger: Logger,
    highlight: Option<Key>,
}

impl<'a> Session<'a> {
    pub fn new(renderer: &'a dyn TreeRenderer, logging: LoggingConfig) -> Self {
        Self {
            tree: RbTree::new(),
            renderer,
            logger: Logger::new(logging),
            highlight: None,
        }
    }

    /// Insert `keys` in order, skipping duplicates.
    pub fn seed(&mut self, keys: &[Key]) {
        let before = self.tree.len();
        self.tree.extend(keys.iter().copied());
        self.logger.debug(
            "session",
            format!("seeded {} of {} keys", self.tree.len() - before, keys.len()),
        );
    }

    pub fn tree(&self) -> &RbTree<Key> {
        &self.tree
    }

    /// Key marked by the last successful search, if no mutation followed it.
    pub fn highlight(&self) -> Option<Key> {
        self.highlight
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Status before any command has run.
    pub fn ready_status(&self) -> String {
        match self.tree.len() {
            0 => "Ready. Tree is empty.".to_string(),
            1 => "Ready. Tree holds 1 key.".to_string(),
            n => format!("Ready. Tree holds {n} keys."),
        }
    }

    /// Draw the tree with the configured renderer.
    pub fn render(&self) -> Result<String> {
        self.renderer.render(&self.tree, self.highlight)
    }

    /// Parse and execute one line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<Report> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                self.logger
                    .warn("session", format!("rejected '{}': {err}", line.trim()));
                return Err(err.into());
            }
        };
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Report> {
        let (status, outcome) = match command {
            Command::Insert(key) => {
                self.highlight = None;
                let outcome = self.tree.insert(key).outcome;
                let status = match outcome {
                    InsertOutcome::Inserted => {
                        let summary = self.summary();
                        self.logger.info("insert", format!("inserted {key}, {summary}"));
                        format!("Inserted: {key}")
                    }
                    InsertOutcome::Duplicate => {
                        self.logger.debug("insert", format!("{key} already present"));
                        format!("Duplicate: {key} already present")
                    }
                };
                (status, Outcome::Insert(outcome))
            }
            Command::Delete(key) => {
                self.highlight = None;
                let outcome = self.tree.delete(&key).outcome;
                let status = match outcome {
                    DeleteOutcome::Deleted => {
                        let summary = self.summary();
                        self.logger.info("delete", format!("deleted {key}, {summary}"));
                        format!("Deleted: {key}")
                    }
                    DeleteOutcome::NotFound => {
                        self.logger.debug("delete", format!("{key} not present"));
                        format!("Node {key} not found.")
                    }
                };
                (status, Outcome::Delete(outcome))
            }
            Command::Search(key) => {
                let outcome = self.tree.search(&key);
                let status = match outcome {
                    SearchOutcome::Found(color) => {
                        self.highlight = Some(key);
                        self.logger.info("search", format!("found {key} ({color})"));
                        format!("Found {key} [Color: {color}]")
                    }
                    SearchOutcome::NotFound => {
                        self.logger.debug("search", format!("{key} not present"));
                        format!("Node {key} not found.")
                    }
                };
                (status, Outcome::Search(outcome))
            }
            Command::Clear => {
                let removed = self.tree.len();
                self.tree.clear();
                self.highlight = None;
                self.logger.info("session", format!("cleared {removed} keys"));
                ("Tree cleared.".to_string(), Outcome::Cleared)
            }
            Command::Show => {
                let drawing = self.render().context("render tree")?;
                let summary = self.summary();
                self.logger.debug("session", format!("rendered {summary}"));
                (self.summary_status(), Outcome::Rendered(drawing))
            }
            Command::Check => {
                let report = TreeValidator::validate(&self.tree).context("tree failed validation")?;
                self.logger.info(
                    "session",
                    format!("validated {} keys, black height {}", report.len, report.black_height),
                );
                (
                    format!(
                        "Tree is valid: {} keys, height {}, black height {}.",
                        report.len, report.height, report.black_height
                    ),
                    Outcome::Checked(report),
                )
            }
        };

        Ok(Report {
            command,
            status,
            outcome,
            root: self.tree.root(),
        })
    }

    /// Parse all of `script`, then execute it. A script with any bad line
    /// runs nothing.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<Report>> {
        let commands = parse_script(script)?;
        self.logger
            .debug("session", format!("running script of {} commands", commands.len()));
        commands.into_iter().map(|c| self.execute(c)).collect()
    }

    /// Take pending journal lines in the configured format.
    pub fn drain_log_lines(&mut self) -> Result<Vec<String>> {
        self.logger.drain_lines()
    }

    fn summary(&self) -> String {
        match self.tree.root_ref() {
            Some(root) => format!("len {}, root {}", self.tree.len(), root.key()),
            None => "tree empty".to_string(),
        }
    }

    fn summary_status(&self) -> String {
        match self.tree.len() {
            0 => "Tree is empty.".to_string(),
            1 => "1 key, height 1.".to_string(),
            n => format!("{n} keys, height {}.", self.tree.height()),
        }
    }
}

/// Split `script` into commands. Commands are separated by newlines or `;`,
/// and `#` starts a comment running to the end of the line.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in script.lines().enumerate() {
        let code = line.split_once('#').map_or(line, |(code, _)| code);
        for part in code.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let command = part
                .parse::<Command>()
                .with_context(|| format!("line {}: '{part}'", index + 1))?;
            commands.push(command);
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbviz_core::Color;
    use rbviz_logging::LogLevel;
    use rbviz_render_text::TextRenderer;

    fn session(renderer: &TextRenderer) -> Session<'_> {
        Session::new(renderer, LoggingConfig::default().with_level(LogLevel::Debug))
    }

    fn statuses(reports: &[Report]) -> Vec<&str> {
        reports.iter().map(|r| r.status.as_str()).collect()
    }

    #[test]
    fn ready_status_counts_keys() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        assert_eq!(s.ready_status(), "Ready. Tree is empty.");
        s.seed(&[1, 2, 2]);
        assert_eq!(s.ready_status(), "Ready. Tree holds 2 keys.");
    }

    #[test]
    fn status_lines_follow_outcomes() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        let reports = s
            .run_script("insert 10; insert 20; insert 30\ninsert 20\nsearch 10\nsearch 99\ndelete 99\ndelete 10\nclear")
            .unwrap();
        assert_eq!(
            statuses(&reports),
            vec![
                "Inserted: 10",
                "Inserted: 20",
                "Inserted: 30",
                "Duplicate: 20 already present",
                "Found 10 [Color: red]",
                "Node 99 not found.",
                "Node 99 not found.",
                "Deleted: 10",
                "Tree cleared.",
            ]
        );
        assert_eq!(reports[4].outcome, Outcome::Search(SearchOutcome::Found(Color::Red)));
        assert!(s.tree().is_empty());
    }

    #[test]
    fn report_carries_current_root() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        s.seed(&[10, 20]);
        let report = s.execute(Command::Insert(30)).unwrap();
        assert_eq!(report.root, s.tree().find(&20));
        assert_eq!(report.outcome, Outcome::Insert(InsertOutcome::Inserted));
    }

    #[test]
    fn search_highlights_until_mutation() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        s.seed(&[10, 20, 30]);
        let _ = s.execute(Command::Search(30)).unwrap();
        assert_eq!(s.highlight(), Some(30));
        assert!(s.render().unwrap().contains("30 (red) <=="));

        let _ = s.execute(Command::Search(99)).unwrap();
        assert_eq!(s.highlight(), Some(30));

        let _ = s.execute(Command::Insert(40)).unwrap();
        assert_eq!(s.highlight(), None);
    }

    #[test]
    fn show_renders_and_check_validates() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        let shown = s.execute(Command::Show).unwrap();
        assert_eq!(shown.outcome, Outcome::Rendered("Tree is Empty\n".into()));
        assert_eq!(shown.status, "Tree is empty.");

        s.seed(&[10, 20, 30, 40, 50]);
        let checked = s.execute(Command::Check).unwrap();
        assert_eq!(
            checked.status,
            "Tree is valid: 5 keys, height 3, black height 2."
        );
    }

    #[test]
    fn invalid_line_is_rejected_and_journaled() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        let err = s.execute_line("insert ten").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid integer.");
        assert!(s.tree().is_empty());
        let lines = s.drain_log_lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("rejected 'insert ten'"));
    }

    #[test]
    fn single_line_accepts_trailing_comment() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        let report = s.execute_line("insert 5 # first key").unwrap();
        assert_eq!(report.command, Command::Insert(5));
        assert_eq!(s.tree().len(), 1);
    }

    #[test]
    fn bad_script_runs_nothing() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        let err = s.run_script("insert 1\ninsert 2\ninsert x").unwrap_err();
        assert_eq!(format!("{err:#}"), "line 3: 'insert x': Please enter a valid integer.");
        assert!(s.tree().is_empty());
    }

    #[test]
    fn script_comments_and_blanks_are_skipped() {
        let commands = parse_script("# seed\ninsert 1 # first\n\n ; ;show").unwrap();
        assert_eq!(commands, vec![Command::Insert(1), Command::Show]);
    }

    #[test]
    fn journal_uses_operation_components() {
        let renderer = TextRenderer;
        let mut s = session(&renderer);
        let _ = s.run_script("insert 1; insert 1; search 1; delete 1").unwrap();
        let components: Vec<_> = s
            .logger()
            .entries()
            .iter()
            .filter_map(|e| e.component.as_deref())
            .collect();
        assert_eq!(components, vec!["session", "insert", "insert", "search", "delete"]);
    }

    #[test]
    fn info_level_hides_no_op_outcomes() {
        let renderer = TextRenderer;
        let mut s = Session::new(&renderer, LoggingConfig::default());
        let _ = s.run_script("insert 1; insert 1; delete 5").unwrap();
        assert_eq!(s.logger().entries().len(), 1);
    }
}
