//! Full-screen panels: every review, the image gallery and the image viewer.

use crate::app::App;
use crate::locale::image_label;
use crate::reviews::all_reviews_sorted;
use crate::util::{strip_control_chars, truncate_to_width, wrap_text};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::help::centered_rect;
use super::page::star_spans;

fn bordered<'a>(app: &App, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.overlay_border)
        .title(title)
}

/// Every review, highest rating first, regardless of the page filter.
pub(super) fn render_all_reviews(f: &mut Frame, app: &App) {
    let overlay = centered_rect(90, 90, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }
    f.render_widget(Clear, overlay);

    let strings = app.language.strings();
    let palette = &app.theme;
    let reviews = &app.content.view().reviews.payload.reviews;
    let text_width = overlay.width.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for review in all_reviews_sorted(reviews) {
        let mut header = star_spans(f64::from(review.display_rating()), palette);
        header.push(Span::styled(
            format!(" {}", strip_control_chars(&review.display_name)),
            palette.reviewer,
        ));
        header.push(Span::styled(
            format!(" · {}", strip_control_chars(&review.date)),
            palette.muted,
        ));
        lines.push(Line::from(header));
        for line in wrap_text(&strip_control_chars(&review.body), text_width) {
            lines.push(Line::from(Span::styled(format!("  {}", line), palette.body)));
        }
        lines.push(Line::default());
    }

    let visible = overlay.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    let scroll = app.overlay_scroll.min(max_scroll);
    let title = format!(" {} ({}) ", strings.all_reviews, reviews.len());

    let paragraph = Paragraph::new(lines)
        .block(bordered(app, title))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, overlay);
}

/// Thumbnail list of every image; Enter enlarges the selection.
pub(super) fn render_gallery(f: &mut Frame, app: &App) {
    let overlay = centered_rect(80, 80, f.area());
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }
    f.render_widget(Clear, overlay);

    let Some(set) = app.images() else {
        return;
    };
    let strings = app.language.strings();
    let width = overlay.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = set
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let label = image_label(image, app.language, i);
            let text = format!("{:>3}. {}", i + 1, label);
            ListItem::new(Line::from(Span::styled(
                truncate_to_width(&text, width).into_owned(),
                app.theme.image_tile,
            )))
        })
        .collect();

    let title = format!(" {} ({}) ", strings.trip_photos, set.images.len());
    let list = List::new(items)
        .block(bordered(app, title))
        .highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.gallery.cursor.min(set.images.len().saturating_sub(1))));
    f.render_stateful_widget(list, overlay, &mut state);
}

/// Full-size view of one image: its label, position and link.
pub(super) fn render_viewer(f: &mut Frame, app: &App) {
    let area = f.area();
    let overlay = centered_rect(70, 50, area);
    if overlay.width < 20 || overlay.height < 5 {
        return;
    }
    f.render_widget(Clear, overlay);

    let strings = app.language.strings();
    let total = app.images().map_or(0, |set| set.images.len());
    let Some((index, image)) = app.viewed_image() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            image_label(image, app.language, index).into_owned(),
            app.theme.title,
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{} / {}", index + 1, total),
            app.theme.muted,
        )),
        Line::from(Span::styled(image.url.clone(), app.theme.link)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(bordered(app, format!(" {} ", strings.full_size_view)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, overlay);
}

#[cfg(test)]
mod tests {
    use crate::aggregator::Settlement;
    use crate::app::App;
    use crate::content::{Image, ImageSet};
    use crate::keybindings::KeybindingRegistry;
    use crate::locale::Language;
    use crate::theme::ThemeVariant;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| super::super::render::render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn loaded_app() -> App {
        let mut app = App::new(
            Language::En,
            "4days",
            ThemeVariant::Dark,
            KeybindingRegistry::new(),
        )
        .unwrap();
        let images = ImageSet {
            package_id: "4days".to_string(),
            images: (1..=3)
                .map(|id| Image {
                    id,
                    url: format!("http://localhost:8000/api/images/4days/proxy/{}", id),
                    category: "hero".to_string(),
                    alt_text: format!("Salar {}", id),
                    alt_text_en: Some(format!("Salt flat {}", id)),
                })
                .collect(),
        };
        app.apply_settlement(Settlement::Images(Ok(images)));
        app
    }

    #[test]
    fn test_gallery_lists_images() {
        let mut app = loaded_app();
        assert!(app.show_gallery());
        let text = screen(&mut app);
        assert!(text.contains("Trip Photos (3)"));
        assert!(text.contains("Salt flat 2"));
    }

    #[test]
    fn test_viewer_shows_position() {
        let mut app = loaded_app();
        app.show_gallery();
        app.gallery.cursor = 1;
        assert!(app.view_selected_image());
        let text = screen(&mut app);
        assert!(text.contains("2 / 3"));
        assert!(text.contains("Full size view"));
    }

    #[test]
    fn test_all_reviews_panel_title() {
        let mut app = loaded_app();
        app.show_all_reviews();
        let count = app.content.view().reviews.payload.reviews.len();
        let text = screen(&mut app);
        assert!(text.contains(&format!("All Reviews ({})", count)));
    }
}
