use crate::ui::util::{
    clamp_cursor, option_label, scroll_down, scroll_to_bottom, scroll_to_top, scroll_up,
};
use crate::view::TransactionListView;

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) view: TransactionListView,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) endpoint: String,

    // Table cursor over the visible rows
    pub(crate) row_index: usize,
    pub(crate) row_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(view: TransactionListView, endpoint: impl Into<String>) -> Self {
        Self {
            running: true,
            view,
            status_message: String::new(),
            show_help: false,
            endpoint: endpoint.into(),
            row_index: 0,
            row_scroll: 0,
            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Call after anything that can change the visible rows.
    pub(crate) fn rows_changed(&mut self) {
        let len = self.view.visible().len();
        clamp_cursor(&mut self.row_index, &mut self.row_scroll, len);
    }

    pub(crate) fn cycle_category(&mut self, delta: i32) {
        self.view.cycle_category(delta);
        self.rows_changed();
        let msg = format!(
            "Category: {}",
            option_label(&self.view.filter().category, "All Categories")
        );
        self.set_status(msg);
    }

    pub(crate) fn cycle_status(&mut self, delta: i32) {
        self.view.cycle_status(delta);
        self.rows_changed();
        let msg = format!(
            "Status: {}",
            option_label(&self.view.filter().status, "All Statuses")
        );
        self.set_status(msg);
    }

    pub(crate) fn clear_filters(&mut self) {
        self.view.set_category("");
        self.view.set_status("");
        self.rows_changed();
        self.set_status("Filters cleared");
    }

    pub(crate) fn reload(&mut self) {
        if self.view.reload().is_some() {
            self.set_status("Reloading transactions...");
        }
    }

    pub(crate) fn fetch_with_filters(&mut self) {
        let query = self.view.filter().to_query();
        if self.view.fetch_with_filters().is_some() {
            self.set_status(format!("Fetching with server-side filter: {query}"));
        }
    }

    /// Drain a finished fetch into the view. Returns whether anything changed.
    pub(crate) fn poll_fetch(&mut self) -> bool {
        if !self.view.poll() {
            return false;
        }
        self.rows_changed();
        let msg = match self.view.state().error() {
            Some(err) => format!("Fetch failed ({})", err.kind),
            None => format!("Loaded {} transactions", self.view.total()),
        };
        self.set_status(msg);
        true
    }

    pub(crate) fn move_down(&mut self) {
        let len = self.view.visible().len();
        scroll_down(&mut self.row_index, &mut self.row_scroll, len, self.visible_rows);
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.row_index, &mut self.row_scroll);
    }

    pub(crate) fn goto_top(&mut self) {
        scroll_to_top(&mut self.row_index, &mut self.row_scroll);
    }

    pub(crate) fn goto_bottom(&mut self) {
        let len = self.view.visible().len();
        scroll_to_bottom(&mut self.row_index, &mut self.row_scroll, len, self.visible_rows);
    }

    pub(crate) fn quit(&mut self) {
        self.view.unmount();
        self.running = false;
    }
}
