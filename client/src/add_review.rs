use seed::{prelude::*, *};

use shared::{Page, Place};

use crate::api::{self, ApiError};
use crate::{browser, review_form};

enum Target {
    Loading,
    Loaded(Place),
    Failed,
}

pub struct Model {
    place_id: String,
    place: Target,
    review_form: review_form::Model,
}

impl Model {
    /// Only reachable with a token; the page guard redirects everyone else.
    pub fn new(place_id: String, token: String) -> Self {
        Model {
            review_form: review_form::Model::new(place_id.clone(), token),
            place_id,
            place: Target::Loading,
        }
    }
}

pub enum Msg {
    Fetched(Result<Place, ApiError>),
    ReviewForm(review_form::Msg),
}

pub fn fetch(token: Option<String>, id: String, orders: &mut impl Orders<Msg>) {
    orders.perform_cmd(async move { Msg::Fetched(api::get_place(token, id).await) });
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Fetched(Ok(place)) => {
            model.place = Target::Loaded(place);
        }

        Msg::Fetched(Err(error)) => {
            log::error!("error fetching place {}: {}", model.place_id, error);
            model.place = Target::Failed;
            browser::alert("Could not load place details.");
        }

        Msg::ReviewForm(msg) => {
            review_form::update(
                msg,
                &mut model.review_form,
                &mut orders.proxy(Msg::ReviewForm),
            );
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let back = Page::Detail {
        place_id: Some(model.place_id.clone()),
    };
    section![
        id!("add-review"),
        match &model.place {
            Target::Loading => h2!["Add a Review"],
            Target::Loaded(place) => h2![format!("Reviewing: {}", place.title)],
            Target::Failed => p![C!["placeholder"], "Could not load place details."],
        },
        review_form::view(&model.review_form).map_msg(Msg::ReviewForm),
        a![
            C!["details-button"],
            attrs! {At::Href => back.href()},
            "Back to place"
        ],
    ]
}
