use std::cell::RefCell;
use std::rc::Rc;

use filterlist::ui::style::SLATE;
use filterlist::ui::{TerminalHost, TerminalMode};
use filterlist::{
    DialogError, DialogHandle, DialogHost, DialogState, EventDisposition, FilterableListDialog,
    RenderSurface,
};

const STATES: [&str; 4] = ["Alabama", "Alaska", "Arizona", "Arkansas"];

#[derive(Debug, Default)]
struct CountingSurface {
    rows: usize,
}

impl RenderSurface for CountingSurface {
    type Row = String;

    fn on_content_replaced(&mut self, row_count: usize, _query: &str) {
        self.rows = row_count;
    }

    fn bind_row(&self, _position: usize, item: &str) -> Self::Row {
        item.to_string()
    }

    fn row_count(&self) -> usize {
        self.rows
    }
}

#[derive(Debug, Default)]
struct ScriptHost {
    shown: usize,
    dismissed: usize,
}

impl DialogHost for ScriptHost {
    type Surface = CountingSurface;

    fn create_surface(&mut self) -> Self::Surface {
        CountingSurface::default()
    }

    fn show(&mut self) {
        self.shown += 1;
    }

    fn dismiss(&mut self) {
        self.dismissed += 1;
    }
}

type Picked = Rc<RefCell<Vec<String>>>;

fn open<H: DialogHost>(host: H, items: &[&str]) -> (Picked, DialogHandle<H>) {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    let mut dialog = FilterableListDialog::create(
        host,
        items.iter().map(|item| item.to_string()).collect::<Vec<_>>(),
        move |item| sink.borrow_mut().push(item),
    );
    dialog.show().expect("fresh dialog can be shown");
    (picked, dialog)
}

#[test]
fn typing_narrows_then_tap_selects_from_the_narrowed_list() {
    let (picked, mut dialog) = open(ScriptHost::default(), &STATES);

    dialog.on_query_text_changed("ar");
    assert_eq!(dialog.presenter().displayed(), ["Arizona", "Arkansas"]);

    assert_eq!(dialog.on_row_tapped(1), Ok(EventDisposition::Selected));
    assert_eq!(*picked.borrow(), ["Arkansas"]);
    assert_eq!(dialog.state(), DialogState::Selected);
    assert_eq!(dialog.host().dismissed, 1);
}

#[test]
fn deleting_the_query_restores_the_full_list() {
    let (_, mut dialog) = open(ScriptHost::default(), &STATES);

    dialog.on_query_text_changed("ALA");
    assert_eq!(dialog.presenter().displayed(), ["Alabama", "Alaska"]);
    dialog.on_query_text_changed("");
    assert_eq!(dialog.presenter().displayed(), STATES);
}

#[test]
fn no_match_shows_nothing_and_taps_fail() {
    let (picked, mut dialog) = open(ScriptHost::default(), &["Texas"]);

    dialog.on_query_text_changed("zz");
    assert_eq!(dialog.presenter().row_count(), 0);
    assert_eq!(
        dialog.on_row_tapped(0),
        Err(DialogError::OutOfRange {
            position: 0,
            len: 0
        })
    );
    assert!(picked.borrow().is_empty());
    assert_eq!(dialog.state(), DialogState::Showing);
}

#[test]
fn cancel_closes_without_a_selection_and_later_events_are_ignored() {
    let (picked, mut dialog) = open(ScriptHost::default(), &STATES);

    assert_eq!(dialog.cancel(), EventDisposition::Dismissed);
    assert_eq!(dialog.on_query_text_changed("a"), EventDisposition::Ignored);
    assert_eq!(dialog.on_row_tapped(0), Ok(EventDisposition::Ignored));
    assert!(picked.borrow().is_empty());
    assert_eq!(dialog.selection(), None);
}

#[test]
fn headless_terminal_host_tracks_the_displayed_rows() {
    let (picked, mut dialog) = open(TerminalHost::new(TerminalMode::Headless, SLATE), &STATES);
    assert!(dialog.host().is_visible());

    dialog.on_query_text_changed("ska");
    assert_eq!(dialog.presenter().surface().row_count(), 1);
    assert_eq!(dialog.presenter().surface().selected(), Some(0));

    dialog.on_row_tapped(0).expect("highlighted row exists");
    assert_eq!(*picked.borrow(), ["Alaska"]);
    assert!(!dialog.host().is_visible());
}
