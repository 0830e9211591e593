use seed::{prelude::*, *};

use shared::filter::{PriceFilter, OPTIONS};
use shared::{Page, Place};

use crate::api::{self, ApiError};
use crate::view as render;

enum Places {
    Hidden,
    Loading,
    Loaded(Vec<Place>),
    Failed,
}

/// The listing keeps the last fetched places so the price filter can
/// re-render without another request.
pub struct Model {
    places: Places,
    filter: PriceFilter,
}

pub enum Msg {
    Fetched(Result<Vec<Place>, ApiError>),
    FilterChanged(String),
}

impl Model {
    pub fn new(has_token: bool) -> Self {
        Model {
            places: if has_token {
                Places::Loading
            } else {
                Places::Hidden
            },
            filter: PriceFilter::All,
        }
    }
}

pub fn fetch(token: Option<String>, orders: &mut impl Orders<Msg>) {
    orders.perform_cmd(async move { Msg::Fetched(api::list_places(token).await) });
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Fetched(Ok(places)) => {
            log::debug!("fetched {} places", places.len());
            model.places = Places::Loaded(places);
        }

        Msg::Fetched(Err(error)) => {
            log::error!("could not load places: {}", error);
            model.places = Places::Failed;
        }

        Msg::FilterChanged(value) => match value.parse() {
            Ok(filter) => model.filter = filter,
            Err(error) => {
                log::warn!("{}", error);
                orders.skip();
            }
        },
    }
}

fn price_filter(current: PriceFilter) -> Node<Msg> {
    div![
        C!["filter"],
        label![attrs! {At::For => "price-filter"}, "Max price:"],
        select![
            id!("price-filter"),
            input_ev(Ev::Change, Msg::FilterChanged),
            OPTIONS.iter().map(|value| {
                let selected = value.parse::<PriceFilter>().ok() == Some(current);
                option![
                    attrs! {
                        At::Value => value,
                        At::Selected => selected.as_at_value(),
                    },
                    if *value == "all" {
                        "All".to_string()
                    } else {
                        format!("${}", value)
                    }
                ]
            })
        ],
    ]
}

pub fn view(model: &Model) -> Node<Msg> {
    section![
        id!("places"),
        h2!["Available Places"],
        price_filter(model.filter),
        match &model.places {
            Places::Hidden => p![
                C!["placeholder"],
                "Please ",
                a![attrs! {At::Href => Page::Login.href()}, "log in"],
                " to see the available places."
            ],
            Places::Loading => p![C!["placeholder"], "Loading..."],
            Places::Failed => p![C!["placeholder"], "Could not load places."],
            Places::Loaded(places) => render::place_list(&model.filter.apply(places)),
        }
    ]
}
