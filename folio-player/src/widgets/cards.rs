//! Frame contents for the three shelf kinds.

use std::path::{Path, PathBuf};

use folio_core::carousel::{CarouselLayout, DisplaySlot};
use folio_model::{ActivityIcon, PostRecord};
use iced::{
    Alignment, ContentFit, Element, Length,
    widget::{
        Space, column, container, image, row, text, text::Wrapping,
    },
};
use lucide_icons::Icon;

use crate::messages::Message;
use crate::shelf::ShelfItem;
use crate::theme::{self, ShowcaseTheme};

const MAX_CHIPS: usize = 4;
const MAX_AVATARS: usize = 4;
const SUMMARY_CHARS: usize = 160;
const COVER_HEIGHT: f32 = 140.0;
const AVATAR_SIZE: f32 = 24.0;

/// Build the frame for one display slot. `interactive` is false while the
/// shelf is being dragged.
pub fn shelf_item<'a>(
    slot: DisplaySlot<'a, ShelfItem>,
    layout: &CarouselLayout,
    height: f32,
    interactive: bool,
) -> Element<'a, Message> {
    let width = Length::Fixed(layout.card_width);
    let height = Length::Fixed(height);
    match slot.item {
        ShelfItem::Project {
            record,
            cover,
            avatars,
        } => project_card(
            record,
            cover.as_deref(),
            avatars,
            interactive,
            width,
            height,
        ),
        ShelfItem::Activity { record, icon } => {
            activity_tile(record, *icon, slot.item_index, width, height)
        }
        ShelfItem::Photo(path) => container(
            image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(width)
        .height(height)
        .clip(true)
        .style(theme::photo_frame)
        .into(),
    }
}

fn project_card<'a>(
    record: &'a PostRecord,
    cover: Option<&'a Path>,
    avatars: &'a [PathBuf],
    interactive: bool,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let meta = &record.metadata;
    let blurb = if meta.summary.is_empty() {
        &meta.description
    } else {
        &meta.summary
    };

    let chips = meta.technologies.iter().take(MAX_CHIPS).fold(
        row![].spacing(6),
        |chips, tech| {
            chips.push(
                container(text(tech.as_str()).size(12))
                    .padding([4, 10])
                    .style(theme::chip),
            )
        },
    );

    let team = meta.team.len();
    let faces = avatars.iter().take(MAX_AVATARS).fold(
        row![].spacing(4),
        |faces, path| faces.push(avatar(path)),
    );
    let footer = row![
        text(icon_char(Icon::Users))
            .font(lucide_font())
            .size(14)
            .color(ShowcaseTheme::TEXT_DIMMED),
        faces,
        text(format!("{team} member{}", if team == 1 { "" } else { "s" }))
            .size(12)
            .color(ShowcaseTheme::TEXT_DIMMED),
        Space::new().width(Length::Fill),
        text(truncate(&meta.link, 32))
            .size(12)
            .color(ShowcaseTheme::ACCENT)
            .wrapping(Wrapping::None),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let body = column![
        text(meta.title.as_str())
            .size(22)
            .wrapping(Wrapping::None),
        text(truncate(blurb, SUMMARY_CHARS))
            .size(14)
            .color(ShowcaseTheme::TEXT_SECONDARY),
        Space::new().height(Length::Fill),
        chips,
        footer,
    ]
    .spacing(10);

    let mut content = column![];
    if let Some(path) = cover {
        content = content.push(
            image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(COVER_HEIGHT)),
        );
    }
    content = content.push(container(body).padding(20).height(Length::Fill));

    let card = container(content).width(width).height(height).clip(true);
    if interactive {
        card.style(theme::card).into()
    } else {
        // flat while dragging so the pan reads as a single surface
        card.style(theme::placeholder).into()
    }
}

fn avatar<'a>(path: &'a Path) -> Element<'a, Message> {
    container(
        image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .clip(true)
    .style(theme::avatar)
    .into()
}

fn activity_tile<'a>(
    record: &'a PostRecord,
    icon: ActivityIcon,
    index: usize,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let meta = &record.metadata;
    let detail = [&meta.duration, &meta.achievement, &meta.category]
        .into_iter()
        .find(|value| !value.is_empty())
        .map(|value| value.as_str())
        .unwrap_or_default();

    let body = column![
        text(icon_char(icon_for(icon))).font(lucide_font()).size(40),
        Space::new().height(Length::Fill),
        text(meta.title.as_str()).size(20),
        text(detail).size(13),
    ]
    .spacing(6);

    container(body)
        .padding(20)
        .width(width)
        .height(height)
        .style(theme::activity_tile(index))
        .into()
}

pub fn icon_for(icon: ActivityIcon) -> Icon {
    match icon {
        ActivityIcon::Star => Icon::Star,
        ActivityIcon::Camera => Icon::Camera,
        ActivityIcon::Users => Icon::Users,
        ActivityIcon::Medal => Icon::Medal,
        ActivityIcon::Theater => Icon::Drama,
        ActivityIcon::Music => Icon::Music,
    }
}

/// Cut `value` to at most `max_chars` characters, marking the cut with an
/// ellipsis.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String =
        value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}

fn icon_char(icon: Icon) -> String {
    icon.unicode().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("rover", 10), "rover");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo wörld", 6), "héllo…");
        assert_eq!(truncate("abcdef", 4).chars().count(), 4);
    }

    #[test]
    fn every_activity_icon_has_a_glyph() {
        let icons = [
            ActivityIcon::Star,
            ActivityIcon::Camera,
            ActivityIcon::Users,
            ActivityIcon::Medal,
            ActivityIcon::Theater,
            ActivityIcon::Music,
        ];
        let glyphs: std::collections::HashSet<_> =
            icons.into_iter().map(|i| icon_for(i).unicode()).collect();
        assert_eq!(glyphs.len(), icons.len());
    }
}
