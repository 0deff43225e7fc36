//! Text output formatting with colors.

use lodewatch_core::{ServerStatus, WorldStatus};

use super::count_groups;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Width of the widest status label ("Partial Maintenance").
const STATUS_LABEL_WIDTH: usize = 19;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a world list grouped by data center, one world per line,
    /// with a trailing summary.
    pub fn format_worlds(&self, worlds: &[WorldStatus]) -> String {
        if worlds.is_empty() {
            return "No worlds found.\n".to_string();
        }

        let name_width = worlds.iter().map(|w| w.name.len()).max().unwrap_or(0);
        let category_width = worlds
            .iter()
            .map(|w| w.category.as_str().len())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        let mut current_group: Option<&str> = None;

        for world in worlds {
            if current_group != Some(world.group.as_str()) {
                if current_group.is_some() {
                    lines.push(String::new());
                }
                lines.push(self.bold(&world.group));
                current_group = Some(world.group.as_str());
            }
            lines.push(self.format_world_line(world, name_width, category_width));
        }

        lines.push(String::new());
        lines.push(self.summary_line(worlds));

        lines.join("\n") + "\n"
    }

    fn format_world_line(
        &self,
        world: &WorldStatus,
        name_width: usize,
        category_width: usize,
    ) -> String {
        let creation = if world.can_create_new_characters {
            "creation open".to_string()
        } else {
            self.dim("creation closed")
        };

        format!(
            "  {:<name_width$}  {}  {}  {}",
            world.name,
            self.dim(&format!("{:<category_width$}", world.category.as_str())),
            self.status_cell(world.status),
            creation,
        )
    }

    /// Emoji plus a fixed-width colored label, so the creation column lines
    /// up regardless of status.
    fn status_cell(&self, status: ServerStatus) -> String {
        let width = STATUS_LABEL_WIDTH;
        let padded = format!("{:<width$}", status.label());
        let colored = match status {
            ServerStatus::Online => self.color(GREEN, &padded),
            ServerStatus::Maintenance => self.color(RED, &padded),
            ServerStatus::PartialMaintenance => self.color(YELLOW, &padded),
            ServerStatus::Unknown => self.dim(&padded),
        };

        format!("{} {}", status.emoji(), colored)
    }

    fn summary_line(&self, worlds: &[WorldStatus]) -> String {
        let online = worlds.iter().filter(|w| w.status.is_online()).count();
        let maintenance = worlds.iter().filter(|w| w.status.is_maintenance()).count();
        let creation_open = worlds
            .iter()
            .filter(|w| w.can_create_new_characters)
            .count();

        let mut summary = format!(
            "{} worlds in {} groups: {} online",
            worlds.len(),
            count_groups(worlds),
            online,
        );
        if maintenance > 0 {
            summary.push_str(&format!(", {maintenance} under maintenance"));
        }
        summary.push_str(&format!(", {creation_open} open to new characters"));

        self.dim(&summary)
    }

    // ------------------------------------------------------------------
    // Color helpers
    // ------------------------------------------------------------------

    fn color(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.color(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.color(DIM, text)
    }
}
