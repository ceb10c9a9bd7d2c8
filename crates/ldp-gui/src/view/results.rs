//! Results view: warnings, unmapped columns, and the parsed-data table.

use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use ldp_model::ParseReport;

use crate::component::confidence_badge;
use crate::message::Message;
use crate::render::{EMPTY_NOTICE, RecordRow, ReportView, UnmappedRow, build_report_view};

const COL_ROW: Length = Length::Fixed(56.0);
const COL_COL: Length = Length::Fixed(56.0);
const COL_TIER: Length = Length::Fixed(110.0);

/// Render a successful parse. Sections appear in report order and only
/// when they have content; an empty table body becomes a single notice.
pub fn view_results(report: &ParseReport) -> Element<'_, Message> {
    let view = build_report_view(report);

    let mut sections = column![].spacing(16);
    if view.has_warnings() {
        sections = sections.push(warnings_card(&view));
    }
    if view.has_unmapped() {
        sections = sections.push(unmapped_card(&view));
    }
    sections = sections.push(records_card(&view));

    scrollable(sections).width(Length::Fill).into()
}

fn warnings_card<'a>(view: &ReportView) -> Element<'a, Message> {
    let mut body = column![].spacing(6);
    for warning in &view.warnings {
        body = body.push(
            row![
                lucide::triangle_alert().size(13),
                text(warning.clone()).size(13),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    section_card(
        "WARNINGS",
        body.into(),
        |theme| theme.extended_palette().warning.weak.color,
    )
}

fn unmapped_card<'a>(view: &ReportView) -> Element<'a, Message> {
    let header = row![
        text("COL").size(12).width(COL_COL),
        text("HEADER").size(12).width(Length::FillPortion(2)),
        text("REASON").size(12).width(Length::FillPortion(3)),
    ]
    .spacing(8);

    let mut body = column![header].spacing(6);
    for unmapped in &view.unmapped {
        body = body.push(unmapped_row(unmapped));
    }

    section_card(
        "UNMAPPED COLUMNS",
        body.into(),
        |theme| theme.extended_palette().background.weak.color,
    )
}

fn unmapped_row<'a>(unmapped: &UnmappedRow) -> Element<'a, Message> {
    row![
        text(unmapped.col.clone()).size(13).width(COL_COL),
        text(unmapped.header.clone())
            .size(13)
            .width(Length::FillPortion(2)),
        text(unmapped.reason.clone())
            .size(13)
            .width(Length::FillPortion(3)),
    ]
    .spacing(8)
    .into()
}

fn records_card<'a>(view: &ReportView) -> Element<'a, Message> {
    let header = row![
        text("ROW").size(12).width(COL_ROW),
        text("COL").size(12).width(COL_COL),
        text("PARAMETER").size(12).width(Length::FillPortion(3)),
        text("ASSET").size(12).width(Length::FillPortion(2)),
        text("RAW VALUE").size(12).width(Length::FillPortion(3)),
        text("PARSED").size(12).width(Length::FillPortion(2)),
        text("CONFIDENCE").size(12).width(COL_TIER),
    ]
    .spacing(8);

    let mut body = column![header].spacing(6);
    if view.is_empty() {
        body = body.push(text(EMPTY_NOTICE).size(13));
    } else {
        for record in &view.records {
            body = body.push(record_row(record));
        }
    }

    section_card(
        "PARSED DATA",
        body.into(),
        |theme| theme.extended_palette().background.weak.color,
    )
}

fn record_row<'a>(record: &RecordRow) -> Element<'a, Message> {
    row![
        text(record.row.clone()).size(13).width(COL_ROW),
        text(record.col.clone()).size(13).width(COL_COL),
        text(record.param.clone())
            .size(13)
            .width(Length::FillPortion(3)),
        text(record.asset.clone())
            .size(13)
            .width(Length::FillPortion(2)),
        text(record.raw.clone())
            .size(13)
            .width(Length::FillPortion(3)),
        text(record.parsed.clone())
            .size(13)
            .width(Length::FillPortion(2)),
        container(confidence_badge(record.tier)).width(COL_TIER),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Bordered card with a title strip; the strip color varies by section.
fn section_card<'a>(
    title: &'a str,
    body: Element<'a, Message>,
    strip: fn(&Theme) -> iced::Color,
) -> Element<'a, Message> {
    let title_bar = container(text(title).size(12))
        .padding([6.0, 12.0])
        .width(Length::Fill)
        .style(move |theme: &Theme| container::Style {
            background: Some(strip(theme).into()),
            ..Default::default()
        });

    container(column![title_bar, container(body).padding(12)])
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
