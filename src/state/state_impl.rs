use super::{Mode, RowAction};
use crate::api::{Post, PostId};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::pipeline::{ListState, ListView, Navigation, PagePolicy, PageSize, SortField};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::TableState;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    list: ListState,
    view: ListView,
    table_state: TableState,
    mode: Mode,
    page_size_menu_index: usize,
    loading: bool,
    fetch_error: Option<String>,
    alert: Option<String>,
    show_log: bool,
    log_buffer: LogBuffer,
    theme: Theme,
    spinner_index: usize,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            list: ListState::default(),
            view: ListView::default(),
            table_state: TableState::default(),
            mode: Mode::Normal,
            page_size_menu_index: 0,
            loading: false,
            fetch_error: None,
            alert: None,
            show_log: false,
            log_buffer: LogBuffer::new(),
            theme: Theme::default(),
            spinner_index: 0,
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        page_size: PageSize,
        page_policy: PagePolicy,
        theme: Theme,
        log_buffer: LogBuffer,
    ) -> Self {
        let mut state = State {
            net_sender: Some(net_sender),
            list: ListState::new(page_size, page_policy),
            theme,
            log_buffer,
            ..State::default()
        };
        state.refresh_view();
        state
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_log_buffer(&self) -> &LogBuffer {
        &self.log_buffer
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn get_list(&self) -> &ListState {
        &self.list
    }

    /// Return the derived page and summary from the last recomputation.
    ///
    pub fn get_view(&self) -> &ListView {
        &self.view
    }

    /// Page control state, read from the cached view.
    ///
    pub fn get_navigation(&self) -> Navigation {
        Navigation::new(self.list.current_page(), self.view.summary.total_pages)
    }

    pub fn get_table_state(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    /// Recompute the derived view and keep the row selection on the page.
    ///
    fn refresh_view(&mut self) {
        self.view = self.list.view();
        let len = self.view.page.len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            let current = self.table_state.selected().unwrap_or(0);
            self.table_state.select(Some(current.min(len - 1)));
        }
    }

    /// Ask the network thread to fetch the posts.
    ///
    pub fn start_fetch(&mut self) -> &mut Self {
        self.loading = true;
        self.fetch_error = None;
        self.dispatch(NetworkEvent::FetchPosts);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Store the fetched posts as the new working set.
    ///
    pub fn set_posts(&mut self, posts: Vec<Post>) -> &mut Self {
        self.loading = false;
        self.fetch_error = None;
        self.list.set_items(posts);
        self.refresh_view();
        self
    }

    /// Record a failed fetch; the current posts are kept.
    ///
    pub fn set_fetch_error(&mut self, message: String) -> &mut Self {
        self.loading = false;
        self.fetch_error = Some(message);
        self
    }

    pub fn get_fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Search;
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.mode == Mode::Search
    }

    /// Append a character to the search term and refilter.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        let mut term = self.list.search_term().to_owned();
        term.push(c);
        self.set_search_term(&term)
    }

    pub fn backspace_search(&mut self) -> &mut Self {
        let mut term = self.list.search_term().to_owned();
        if term.pop().is_some() {
            self.set_search_term(&term);
        }
        self
    }

    pub fn set_search_term(&mut self, term: &str) -> &mut Self {
        self.list.set_search_term(term);
        self.refresh_view();
        self
    }

    pub fn sort_by(&mut self, field: SortField) -> &mut Self {
        self.list.set_sort_field(field);
        self.refresh_view();
        self
    }

    pub fn next_page(&mut self) -> &mut Self {
        let before = self.list.current_page();
        self.list.next_page();
        if self.list.current_page() != before {
            self.table_state.select(Some(0));
        }
        self.refresh_view();
        self
    }

    pub fn previous_page(&mut self) -> &mut Self {
        let before = self.list.current_page();
        self.list.previous_page();
        if self.list.current_page() != before {
            self.table_state.select(Some(0));
        }
        self.refresh_view();
        self
    }

    /// Open the rows-per-page menu with the current size highlighted.
    ///
    pub fn open_page_size_menu(&mut self) -> &mut Self {
        self.page_size_menu_index = self.list.page_size().index();
        self.mode = Mode::PageSizeMenu;
        self
    }

    pub fn close_page_size_menu(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self
    }

    pub fn is_page_size_menu(&self) -> bool {
        self.mode == Mode::PageSizeMenu
    }

    pub fn get_page_size_menu_index(&self) -> usize {
        self.page_size_menu_index
    }

    pub fn next_page_size_option(&mut self) -> &mut Self {
        self.page_size_menu_index = (self.page_size_menu_index + 1) % PageSize::ALL.len();
        self
    }

    pub fn previous_page_size_option(&mut self) -> &mut Self {
        self.page_size_menu_index = if self.page_size_menu_index == 0 {
            PageSize::ALL.len() - 1
        } else {
            self.page_size_menu_index - 1
        };
        self
    }

    /// Apply the highlighted page size and close the menu.
    ///
    pub fn select_page_size_option(&mut self) -> &mut Self {
        if let Some(size) = PageSize::ALL.get(self.page_size_menu_index) {
            self.set_page_size(*size);
        }
        self.close_page_size_menu()
    }

    pub fn set_page_size(&mut self, size: PageSize) -> &mut Self {
        debug!("Showing {} rows per page.", size);
        self.list.set_page_size(size);
        self.refresh_view();
        self
    }

    pub fn next_row(&mut self) -> &mut Self {
        let len = self.view.page.len();
        if len > 0 {
            let next = match self.table_state.selected() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            self.table_state.select(Some(next));
        }
        self
    }

    pub fn previous_row(&mut self) -> &mut Self {
        let len = self.view.page.len();
        if len > 0 {
            let previous = match self.table_state.selected() {
                Some(i) if i > 0 => i - 1,
                _ => len - 1,
            };
            self.table_state.select(Some(previous));
        }
        self
    }

    /// Return the post under the row cursor.
    ///
    pub fn selected_post(&self) -> Option<&Post> {
        self.table_state
            .selected()
            .and_then(|i| self.view.page.get(i))
    }

    /// Run a row action on the selected post.
    ///
    pub fn act_on_selected(&mut self, action: RowAction) -> &mut Self {
        match self.selected_post().map(|post| post.id.clone()) {
            Some(id) => self.handle_action(action, &id),
            None => self,
        }
    }

    /// Run a row action on the post with the given id.
    ///
    pub fn handle_action(&mut self, action: RowAction, post_id: &PostId) -> &mut Self {
        debug!("Handling {:?} action for post {}...", action, post_id);
        match action {
            RowAction::Delete => {
                self.list.remove_item(post_id);
                self.refresh_view();
            }
            RowAction::Edit | RowAction::View => {
                self.alert = action.alert_text(post_id);
            }
        }
        self
    }

    pub fn get_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) -> &mut Self {
        self.alert = None;
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    fn dispatch(&mut self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to dispatch network event: {}", e);
                self.loading = false;
            }
        } else {
            warn!("No network sender available for {:?}.", event);
            self.loading = false;
        }
    }
}
