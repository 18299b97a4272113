//! Selection against an external host document.

use std::collections::HashMap;

use rating_widget::{
    COLOR_RAMP, CssColor, HostDocument, ICON_IDS, Icon, RATING_FIELD_ID, RatingField, WidgetError,
    select_rating,
};

/// Minimal stand-in for a page that owns its own elements.
struct FakePage {
    icons: HashMap<String, Icon>,
    field: Option<RatingField>,
}

impl FakePage {
    fn complete() -> Self {
        Self {
            icons: ICON_IDS
                .iter()
                .map(|id| (id.to_string(), Icon::new()))
                .collect(),
            field: Some(RatingField::new()),
        }
    }

    fn without_icon(id: &str) -> Self {
        let mut page = Self::complete();
        page.icons.remove(id);
        page
    }
}

impl HostDocument for FakePage {
    fn icon_mut(&mut self, id: &str) -> Option<&mut Icon> {
        self.icons.get_mut(id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut RatingField> {
        if id == RATING_FIELD_ID {
            self.field.as_mut()
        } else {
            None
        }
    }
}

#[test]
fn selection_updates_all_page_elements() {
    let mut page = FakePage::complete();
    select_rating(&mut page, 3).unwrap();

    for (slot, id) in ICON_IDS.iter().enumerate() {
        let color = page.icons[*id].color();
        if slot == 3 {
            assert_eq!(color, COLOR_RAMP[3]);
        } else {
            assert_eq!(color, CssColor::Inherit);
        }
    }
    assert_eq!(page.field.unwrap().value(), Some(3));
}

#[test]
fn missing_icon_is_reported_by_id() {
    let mut page = FakePage::without_icon("I3");

    let err = select_rating(&mut page, 0).unwrap_err();
    assert_eq!(
        err,
        WidgetError::ElementNotFound {
            id: "I3".to_string()
        }
    );

    // Nothing was touched: the remaining icons are still neutral and the
    // field is still empty.
    assert!(page.icons.values().all(|icon| icon.color().is_inherit()));
    assert_eq!(page.field.unwrap().value(), None);
}

#[test]
fn missing_field_is_reported_by_id() {
    let mut page = FakePage::complete();
    page.field = None;

    let err = select_rating(&mut page, 2).unwrap_err();
    assert_eq!(
        err,
        WidgetError::ElementNotFound {
            id: RATING_FIELD_ID.to_string()
        }
    );
    assert!(page.icons.values().all(|icon| icon.color().is_inherit()));
}

#[test]
fn out_of_range_never_touches_the_page() {
    let mut page = FakePage::complete();
    select_rating(&mut page, 1).unwrap();

    let err = select_rating(&mut page, 9).unwrap_err();
    assert_eq!(err, WidgetError::IndexOutOfRange { index: 9 });
    assert_eq!(page.icons["I1"].color(), COLOR_RAMP[1]);
    assert_eq!(page.field.unwrap().value(), Some(1));
}
