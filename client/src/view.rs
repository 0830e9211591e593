use seed::{prelude::*, *};

use shared::model::review_lines;
use shared::{Page, Place};

pub fn place_list<Ms: 'static>(places: &[&Place]) -> Node<Ms> {
    div![
        id!("places-list"),
        if places.is_empty() {
            nodes![p![C!["placeholder"], "No places available."]]
        } else {
            places.iter().map(|place| place_card(place)).collect()
        }
    ]
}

fn place_card<Ms: 'static>(place: &Place) -> Node<Ms> {
    let details = Page::Detail {
        place_id: Some(place.id.clone()),
    };
    div![
        C!["place-item"],
        attrs! {At::from("data-price") => place.price.to_string()},
        h3![place.title.as_str()],
        p![place.description.as_str()],
        p![strong!["Price:"], " ", place.price_label()],
        a![
            C!["details-button"],
            attrs! {At::Href => details.href()},
            "View Details"
        ],
    ]
}

pub fn place_details<Ms: 'static>(place: &Place) -> Node<Ms> {
    div![
        div![
            id!("place-details"),
            h2![place.title.as_str()],
            p![place.description.as_str()],
            p![strong!["Price:"], " ", place.price_label()],
            h4!["Amenities:"],
            ul![place.amenities.iter().map(|amenity| li![amenity.name.as_str()])],
        ],
        section![
            C!["reviews"],
            h3!["Reviews"],
            ul![
                id!("review-list"),
                review_lines(place).into_iter().map(|line| li![line])
            ],
        ],
    ]
}
