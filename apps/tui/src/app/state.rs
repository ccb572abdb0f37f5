use crate::app::actions::AppActions;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use color_eyre::Result;
use roster_radar::domain::{normalize_name, Attribute, PlayerRecord, Position, MAX_RATING, UNRATED};
use roster_radar::roster::{
    delete_player, merge_roster, save_player, visible_indices, FormErrors, MergeOutcome, PositionFilter,
};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Roster,
    EditPlayer,
    ImportPrompt,
}

/// Field focused in the player form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Position,
    Rating(Attribute),
}

impl FormField {
    const COUNT: usize = 2 + Attribute::ALL.len();

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Position => 1,
            Self::Rating(attribute) => 2 + attribute.index(),
        }
    }

    const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Name,
            1 => Self::Position,
            _ => Self::Rating(Attribute::ALL[(index - 2) % Attribute::ALL.len()]),
        }
    }

    pub const fn next(self) -> Self {
        Self::from_index(wrap_increment(self.index(), Self::COUNT))
    }

    pub const fn prev(self) -> Self {
        Self::from_index(wrap_decrement(self.index(), Self::COUNT))
    }
}

/// Holds the state of the add/edit player form
#[derive(Debug, Clone)]
pub struct PlayerForm {
    pub draft: PlayerRecord,
    /// Original name of the player being edited; `None` when adding
    pub editing: Option<String>,
    pub field: FormField,
    pub errors: FormErrors,
}

impl PlayerForm {
    /// Blank form: empty name, centre back, everything unrated
    pub fn blank() -> Self {
        Self {
            draft: PlayerRecord::uniform("", Position::default(), UNRATED),
            editing: None,
            field: FormField::Name,
            errors: FormErrors::default(),
        }
    }

    pub fn from_record(record: &PlayerRecord) -> Self {
        Self {
            draft: record.clone(),
            editing: Some(record.name.clone()),
            field: FormField::Name,
            errors: FormErrors::default(),
        }
    }

    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn push_name_char(&mut self, ch: char) {
        self.draft.name.push(ch);
        self.errors.name = None;
    }

    pub fn pop_name_char(&mut self) {
        self.draft.name.pop();
        self.errors.name = None;
    }

    pub fn cycle_position(&mut self, forward: bool) {
        let len = Position::ALL.len();
        let index = self.draft.position.index();
        let next = if forward {
            wrap_increment(index, len)
        } else {
            wrap_decrement(index, len)
        };
        self.draft.position = Position::from_index(next).unwrap_or_default();
    }

    pub fn set_rating(&mut self, attribute: Attribute, rating: u8) {
        attribute.set(&mut self.draft, rating.min(MAX_RATING));
        if rating != UNRATED {
            self.errors.unrated.retain(|pending| *pending != attribute);
        }
    }

    /// Step the rating of `attribute` by one within 1..=5
    pub fn step_rating(&mut self, attribute: Attribute, up: bool) {
        // Imported ratings may lie outside 0..=5
        let current = attribute.get(&self.draft).min(MAX_RATING);
        let next = if up {
            current.saturating_add(1).min(MAX_RATING)
        } else {
            current.saturating_sub(1).max(1)
        };
        self.set_rating(attribute, next);
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub roster: Vec<PlayerRecord>,
    /// Roster indices currently listed, after filter and search
    pub visible: Vec<usize>,
    /// Highlighted row within `visible`
    pub cursor_index: usize,
    /// Lowercased name of the player whose charts are shown
    pub selected_key: Option<String>,
    pub position_filter: PositionFilter,
    pub search_active: bool,
    pub search_query: String,
    pub form: Option<PlayerForm>,
    pub import_input: String,
    pub status_message: String,
    pub show_help: bool,
    /// False after a failed load; the stored value is backed up before the
    /// next save replaces it
    pub store_readable: bool,
    pub actions: AppActions,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            screen: AppScreen::Roster,
            roster: Vec::new(),
            visible: Vec::new(),
            cursor_index: 0,
            selected_key: None,
            position_filter: PositionFilter::All,
            search_active: false,
            search_query: String::new(),
            form: None,
            import_input: String::new(),
            status_message: String::new(),
            show_help: false,
            store_readable: true,
            actions,
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        self.actions.initialize().await?;
        self.fetch_roster().await
    }

    pub async fn fetch_roster(&mut self) -> Result<()> {
        match self.actions.load_roster().await {
            Ok(roster) => {
                self.store_readable = true;
                self.roster = roster;
                self.refresh_visible();
                Ok(())
            }
            Err(e) => {
                self.store_readable = false;
                Err(e)
            }
        }
    }

    /// Recompute the listed rows, keeping the cursor in range
    pub fn refresh_visible(&mut self) {
        self.visible = visible_indices(&self.roster, self.position_filter, &self.search_query);
        if self.cursor_index >= self.visible.len() {
            self.cursor_index = self.visible.len().saturating_sub(1);
        }
    }

    pub fn cursor_player(&self) -> Option<&PlayerRecord> {
        self.visible
            .get(self.cursor_index)
            .and_then(|index| self.roster.get(*index))
    }

    pub fn selected_player(&self) -> Option<&PlayerRecord> {
        let key = self.selected_key.as_deref()?;
        self.roster.iter().find(|record| record.key() == key)
    }

    pub fn select_cursor(&mut self) {
        self.selected_key = self.cursor_player().map(PlayerRecord::key);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.cursor_index = 0;
            return;
        }
        let last = self.visible.len() - 1;
        self.cursor_index = self.cursor_index.saturating_add_signed(delta).min(last);
    }

    pub fn cycle_filter(&mut self) {
        self.position_filter = self.position_filter.next();
        self.cursor_index = 0;
        self.refresh_visible();
    }

    pub fn apply_search_filter(&mut self) {
        self.cursor_index = 0;
        self.refresh_visible();
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.apply_search_filter();
    }

    pub fn begin_add(&mut self) {
        self.form = Some(PlayerForm::blank());
        self.screen = AppScreen::EditPlayer;
    }

    pub fn begin_edit(&mut self) {
        if let Some(record) = self.cursor_player() {
            self.form = Some(PlayerForm::from_record(record));
            self.screen = AppScreen::EditPlayer;
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.screen = AppScreen::Roster;
    }

    /// Validate and persist the open form; on failure the errors stay on it
    pub async fn submit_form(&mut self) -> Result<()> {
        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };

        match save_player(&self.roster, form.draft.clone(), form.editing.as_deref()) {
            Ok(updated) => {
                let saved_name = form.draft.name.trim().to_string();
                let was_editing = form.is_editing();
                self.persist(updated).await?;
                self.selected_key = Some(normalize_name(&saved_name));
                self.focus_name(&saved_name);
                self.status_message = if was_editing {
                    format!("Updated {saved_name}")
                } else {
                    format!("Added {saved_name}")
                };
                tracing::info!(player = %saved_name, editing = was_editing, "Player saved");
                self.close_form();
            }
            Err(errors) => {
                tracing::debug!(%errors, "Player form rejected");
                form.errors = errors;
            }
        }
        Ok(())
    }

    pub async fn delete_cursor(&mut self) -> Result<()> {
        let Some(name) = self.cursor_player().map(|record| record.name.clone()) else {
            return Ok(());
        };

        let updated = delete_player(&self.roster, &name);
        self.persist(updated).await?;

        if self.selected_key.as_deref() == Some(normalize_name(&name).as_str()) {
            self.selected_key = None;
        }
        self.status_message = format!("Deleted {name}");
        tracing::info!(player = %name, "Player deleted");
        Ok(())
    }

    /// Merge a JSON file into the roster and report the counts
    pub async fn import_from(&mut self, path: &Path) -> Result<MergeOutcome> {
        let incoming = self.actions.read_import(path).await?;
        let outcome = merge_roster(&self.roster, incoming);
        self.persist(outcome.roster.clone()).await?;
        tracing::info!(
            added = outcome.added,
            updated = outcome.updated,
            path = %path.display(),
            "Roster imported"
        );
        Ok(outcome)
    }

    /// Run an import and turn the result into a status line
    pub async fn import_and_report(&mut self, path: &Path) {
        self.status_message = match self.import_from(path).await {
            Ok(outcome) => outcome.summary(),
            Err(e) => {
                tracing::warn!("Import failed: {e}");
                e.to_string()
            }
        };
    }

    pub async fn export(&mut self) -> Result<PathBuf> {
        if self.roster.is_empty() {
            return Err(color_eyre::eyre::eyre!("No players to export"));
        }
        let today = chrono::Utc::now().date_naive();
        self.actions.export_roster(&self.roster, today).await
    }

    async fn persist(&mut self, roster: Vec<PlayerRecord>) -> Result<()> {
        if !self.store_readable {
            self.actions.backup_roster().await?;
            self.store_readable = true;
        }
        self.actions.save_roster(&roster).await?;
        self.roster = roster;
        self.refresh_visible();
        Ok(())
    }

    fn focus_name(&mut self, name: &str) {
        let key = normalize_name(name);
        if let Some(row) = self
            .visible
            .iter()
            .position(|index| self.roster[*index].key() == key)
        {
            self.cursor_index = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(roster: Vec<PlayerRecord>) -> App {
        let mut app = App::new(AppActions::new());
        app.roster = roster;
        app.refresh_visible();
        app
    }

    #[test]
    fn form_fields_wrap_in_both_directions() {
        assert_eq!(FormField::Name.prev(), FormField::Rating(Attribute::Awareness));
        assert_eq!(FormField::Rating(Attribute::Awareness).next(), FormField::Name);
        assert_eq!(FormField::Position.next(), FormField::Rating(Attribute::Mental));
        assert_eq!(
            FormField::Rating(Attribute::Maturity).next(),
            FormField::Rating(Attribute::Passing)
        );
    }

    #[test]
    fn rating_steps_stay_in_range() {
        let mut form = PlayerForm::blank();
        form.step_rating(Attribute::Passing, false);
        assert_eq!(form.draft.passing, 1);

        for _ in 0..10 {
            form.step_rating(Attribute::Passing, true);
        }
        assert_eq!(form.draft.passing, MAX_RATING);
    }

    #[test]
    fn out_of_range_import_rating_steps_without_overflow() {
        let incoming = roster_radar::roster::parse_import(r#"[{"name":"Big","mental":255}]"#).unwrap();

        let mut form = PlayerForm::from_record(&incoming[0]);
        form.step_rating(Attribute::Mental, true);
        assert_eq!(form.draft.mental, MAX_RATING);

        let mut form = PlayerForm::from_record(&incoming[0]);
        form.step_rating(Attribute::Mental, false);
        assert_eq!(form.draft.mental, MAX_RATING - 1);
    }

    #[test]
    fn rating_clears_its_pending_error() {
        let mut form = PlayerForm::blank();
        form.errors.unrated = vec![Attribute::Mental, Attribute::Passing];
        form.set_rating(Attribute::Mental, 4);

        assert_eq!(form.errors.unrated, vec![Attribute::Passing]);
    }

    #[test]
    fn position_cycles_through_the_closed_set() {
        let mut form = PlayerForm::blank();
        form.cycle_position(false);
        assert_eq!(form.draft.position, Position::St);
        form.cycle_position(true);
        assert_eq!(form.draft.position, Position::Cb);
    }

    #[test]
    fn selection_follows_the_record_by_name() {
        let mut app = app_with(vec![
            PlayerRecord::uniform("Sam", Position::Cb, 3),
            PlayerRecord::uniform("Robin", Position::St, 4),
        ]);
        app.move_cursor(1);
        app.select_cursor();
        assert_eq!(app.selected_player().map(|p| p.name.as_str()), Some("Robin"));

        app.roster[1] = PlayerRecord::uniform("robin", Position::St, 5);
        assert_eq!(app.selected_player().map(|p| p.mental), Some(5));
    }

    #[test]
    fn cursor_is_clamped_to_visible_rows() {
        let mut app = app_with(vec![
            PlayerRecord::uniform("Sam", Position::Cb, 3),
            PlayerRecord::uniform("Robin", Position::St, 4),
        ]);
        app.move_cursor(10);
        assert_eq!(app.cursor_index, 1);
        app.move_cursor(-10);
        assert_eq!(app.cursor_index, 0);

        app.cycle_filter();
        assert_eq!(app.visible, vec![0]);
        app.search_query = "zzz".to_string();
        app.apply_search_filter();
        assert!(app.cursor_player().is_none());
    }

    #[tokio::test]
    async fn export_is_named_after_the_utc_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(vec![PlayerRecord::uniform("Sam", Position::Cb, 3)]);
        app.actions.export_dir = dir.path().to_path_buf();

        let path = app.export().await.unwrap();

        let expected = roster_radar::roster::export_file_name(chrono::Utc::now().date_naive());
        assert_eq!(path, dir.path().join(expected));
    }

    #[tokio::test]
    async fn unreadable_store_is_backed_up_before_the_first_save() {
        use roster_radar::db::queries::{get_entry, put_entry};
        use roster_radar::db::{create_database_pool_with_url, load_roster, ROSTER_KEY};

        let pool = create_database_pool_with_url("sqlite::memory:").await.unwrap();
        put_entry(&pool, ROSTER_KEY, "{not json").await.unwrap();

        let mut app = App::new(AppActions::new());
        app.actions.db_pool = Some(pool.clone());
        assert!(app.fetch_roster().await.is_err());
        assert!(!app.store_readable);

        app.begin_add();
        if let Some(form) = app.form.as_mut() {
            form.draft = PlayerRecord::uniform("Robin", Position::St, 4);
        }
        app.submit_form().await.unwrap();
        assert!(app.store_readable);

        let backup_key: String =
            sqlx::query_scalar("SELECT key FROM kv_store WHERE key LIKE 'players.corrupt.%'")
                .fetch_one(&pool)
                .await
                .unwrap();
        let backup = get_entry(&pool, &backup_key).await.unwrap().unwrap();
        assert_eq!(backup.value, "{not json");

        let stored = load_roster(&pool).await.unwrap();
        assert_eq!(stored, vec![PlayerRecord::uniform("Robin", Position::St, 4)]);
    }
}
