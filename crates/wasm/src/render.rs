//! DOM emission for cover cards and platform rows

use rankr_core::{GameCard, PlatformRow};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Append one `div.game-card > img` per card to `grid`
pub fn append_game_cards(document: &Document, grid: &Element, cards: &[GameCard]) -> Result<(), JsValue> {
    for card in cards {
        let card_el = document.create_element("div")?;
        card_el.set_class_name("game-card");

        let img = document.create_element("img")?;
        img.set_attribute("src", &card.image_url)?;
        img.set_attribute("alt", &card.alt)?;

        card_el.append_child(&img)?;
        grid.append_child(&card_el)?;
    }
    Ok(())
}

/// Replace the children of `list` with `rows`
///
/// Nodes are built before the list is cleared so a DOM error leaves the
/// previous content in place.
pub fn replace_platform_rows(document: &Document, list: &Element, rows: &[PlatformRow]) -> Result<(), JsValue> {
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let li = document.create_element("li")?;
        match row {
            PlatformRow::Link { label } => {
                let link = document.create_element("a")?;
                link.set_attribute("href", "#")?;
                link.set_text_content(Some(label));
                li.append_child(&link)?;
            }
            PlatformRow::Placeholder { label } => {
                li.set_class_name("no-results");
                li.set_text_content(Some(label));
            }
        }
        items.push(li);
    }

    list.set_text_content(None);
    for li in &items {
        list.append_child(li)?;
    }
    Ok(())
}
