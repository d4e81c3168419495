use sift::ranking::rank;
use sift::scorer::ScoreOptions;

/// A ranked row, pointing back into the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub total: i64,
}

#[derive(Debug)]
pub struct App {
    /// All candidates, in input order
    pub candidates: Vec<String>,
    /// Scoring options for every re-rank
    pub options: ScoreOptions,
    /// Maximum number of ranked rows kept
    pub limit: usize,
    /// Live query buffer
    pub query: String,
    /// Current ranking, best first
    pub hits: Vec<Hit>,
    /// Number of candidates that matched before truncation
    pub matched: usize,
    /// Currently selected row
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Temporary message to display
    pub message: Option<String>,
    /// Candidate to print on exit
    pub selected_entry: Option<String>,
    pub terminal_width: usize,
    pub terminal_height: usize,
    /// Where the candidates came from (for display)
    pub source_name: String,
}

impl App {
    pub fn new(
        candidates: Vec<String>,
        options: ScoreOptions,
        limit: usize,
        source_name: String,
        terminal_width: usize,
        terminal_height: usize,
    ) -> Self {
        let mut app = App {
            candidates,
            options,
            limit,
            query: String::new(),
            hits: Vec::new(),
            matched: 0,
            selected_index: 0,
            scroll_offset: 0,
            message: None,
            selected_entry: None,
            terminal_width,
            terminal_height,
            source_name,
        };
        app.rerank();
        app
    }

    /// Rank every candidate against the current query
    pub fn rerank(&mut self) {
        let ranking = rank(&self.candidates, &self.query, &self.options, self.limit);
        self.matched = ranking.matched;
        self.hits = ranking
            .top
            .iter()
            .map(|r| Hit {
                index: r.index,
                total: r.score.total,
            })
            .collect();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn query_push(&mut self, ch: char) {
        self.query.push(ch);
        self.message = None;
        self.rerank();
    }

    pub fn query_pop(&mut self) {
        if self.query.pop().is_some() {
            self.rerank();
        }
    }

    pub fn query_clear(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.rerank();
        }
    }

    pub fn candidate(&self, hit: &Hit) -> &str {
        &self.candidates[hit.index]
    }

    pub fn current_hit(&self) -> Option<&Hit> {
        self.hits.get(self.selected_index)
    }

    pub fn select_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            }
        }
    }

    pub fn select_down(&mut self) {
        if self.selected_index < self.hits.len().saturating_sub(1) {
            self.selected_index += 1;
            let usable_height = self.get_list_height();
            if self.selected_index >= self.scroll_offset + usable_height {
                self.scroll_offset = self.selected_index + 1 - usable_height;
            }
        }
    }

    /// Select the current row for printing on exit
    pub fn select_entry(&mut self) -> Option<String> {
        let content = self.current_hit().map(|hit| self.candidate(hit).to_string());
        self.selected_entry = content.clone();
        content
    }

    /// Rows available for the list
    pub fn get_list_height(&self) -> usize {
        // border: 2, query line: 1, status bar: 1
        let reserved = 4;
        self.terminal_height.saturating_sub(reserved).max(1)
    }

    /// Columns available inside the list border
    pub fn get_row_width(&self) -> usize {
        self.terminal_width.saturating_sub(2)
    }

    pub fn get_visible_hits(&self) -> &[Hit] {
        let end = (self.scroll_offset + self.get_list_height()).min(self.hits.len());
        if self.scroll_offset >= end {
            &[]
        } else {
            &self.hits[self.scroll_offset..end]
        }
    }

    pub fn get_match_count_info(&self) -> String {
        if self.query.is_empty() {
            format!("{} candidates", self.candidates.len())
        } else {
            format!("{}/{} matches", self.matched, self.candidates.len())
        }
    }

    pub fn show_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Record the new size and keep the selected row on screen
    pub fn update_terminal_size(&mut self, width: usize, height: usize) {
        self.terminal_width = width;
        self.terminal_height = height;

        self.selected_index = self.selected_index.min(self.hits.len().saturating_sub(1));
        let usable_height = self.get_list_height();
        if self.selected_index >= self.scroll_offset + usable_height {
            self.scroll_offset = self.selected_index + 1 - usable_height;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_app(candidates: &[&str]) -> App {
        App::new(
            candidates.iter().map(|s| s.to_string()).collect(),
            ScoreOptions::default(),
            20,
            "test".to_string(),
            80,
            24,
        )
    }

    #[test]
    fn test_app_creation() {
        let app = create_app(&[]);
        assert!(app.hits.is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let app = create_app(&["b", "a"]);
        assert_eq!(app.hits.len(), 2);
        assert_eq!(app.candidate(&app.hits[0]), "b");
    }

    #[test]
    fn test_query_edits_rerank() {
        let mut app = create_app(&["foo_bar", "xyz", "FooBar"]);
        app.query_push('f');
        app.query_push('b');
        assert_eq!(app.query, "fb");
        assert_eq!(app.matched, 2);
        assert_eq!(app.candidate(&app.hits[0]), "FooBar");

        app.query_pop();
        assert_eq!(app.query, "f");
        assert_eq!(app.matched, 2);

        app.query_clear();
        assert_eq!(app.hits.len(), 3);
    }

    #[test]
    fn test_selection_resets_on_edit() {
        let mut app = create_app(&["ab", "abc", "abcd"]);
        app.select_down();
        app.select_down();
        assert_eq!(app.selected_index, 2);
        app.query_push('a');
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_select_entry() {
        let mut app = create_app(&["src/main.rs", "src/lib.rs"]);
        app.query_push('l');
        assert_eq!(app.select_entry().as_deref(), Some("src/lib.rs"));
        assert_eq!(app.selected_entry.as_deref(), Some("src/lib.rs"));
    }

    #[test]
    fn test_limit() {
        let names: Vec<String> = (0..40).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut app = create_app(&refs);
        app.limit = 10;
        app.rerank();
        assert_eq!(app.hits.len(), 10);
        assert_eq!(app.matched, 40);
    }

    #[test]
    fn test_resize_keeps_selection_visible() {
        let names: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut app = create_app(&refs);
        for _ in 0..15 {
            app.select_down();
        }
        assert_eq!(app.selected_index, 15);
        assert_eq!(app.scroll_offset, 0);

        // 10 rows tall leaves 6 for the list
        app.update_terminal_size(40, 10);
        assert_eq!(app.get_list_height(), 6);
        assert_eq!(app.scroll_offset, 10);
        let visible = app.get_visible_hits();
        assert!(visible.contains(&app.hits[15]));

        app.update_terminal_size(40, 40);
        assert_eq!(app.scroll_offset, 10);
        assert_eq!(app.get_row_width(), 38);
    }

    #[test]
    fn test_resize_clamps_selection() {
        let mut app = create_app(&["a", "b", "c"]);
        app.select_down();
        app.select_down();
        app.hits.truncate(1);
        app.update_terminal_size(80, 24);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.scroll_offset, 0);
        assert!(app.current_hit().is_some());
    }
}
