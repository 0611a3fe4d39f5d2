use crate::app::{App, Overlay};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.gallery.viewer().is_some() {
        Cow::Borrowed("[h/l] previous/next [o]pen in browser [Esc] close")
    } else {
        match app.overlay {
            Overlay::Help => Cow::Borrowed("[j/k] scroll [?/Esc] close"),
            Overlay::AllReviews => Cow::Borrowed("[j/k] scroll [a/Esc] close"),
            Overlay::Gallery => Cow::Borrowed("[j/k] select [Enter] view [g/Esc] close"),
            Overlay::None => match app.navigator.active_label() {
                Some(label) => Cow::Owned(format!(
                    "{} | [Tab] next section [1-5] filter [g]allery [?]help [q]uit",
                    label
                )),
                None => Cow::Borrowed("[Tab] next section [1-5] filter [g]allery [?]help [q]uit"),
            },
        }
    };

    let paragraph = Paragraph::new(text).style(app.theme.status_bar);
    f.render_widget(paragraph, area);
}
