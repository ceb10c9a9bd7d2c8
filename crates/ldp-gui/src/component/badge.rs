//! Confidence badge component.
//!
//! Pill-shaped indicator for the three confidence tiers. The tier has
//! already been classified by the renderer (unknown wire strings arrive
//! here as `Low`), so this mapping is total with no default arm needed.

use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use ldp_model::Confidence;

/// Creates a badge for a confidence tier.
///
/// High is green, medium amber, low red, using the theme's extended
/// palette so the badge follows light/dark themes.
pub fn confidence_badge<'a, M: 'a>(tier: Confidence) -> Element<'a, M> {
    container(
        text(tier.as_str().to_uppercase())
            .size(11)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                let color = match tier {
                    Confidence::High => palette.success.strong.color,
                    Confidence::Medium => palette.warning.strong.color,
                    Confidence::Low => palette.danger.strong.color,
                };
                text::Style { color: Some(color) }
            }),
    )
    .padding([3.0, 10.0])
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = match tier {
            Confidence::High => palette.success.weak.color,
            Confidence::Medium => palette.warning.weak.color,
            Confidence::Low => palette.danger.weak.color,
        };
        container::Style {
            background: Some(background.into()),
            border: Border {
                radius: 999.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
