use seed::{prelude::*, *};

use shared::Place;

use crate::api::{self, ApiError};
use crate::view as render;
use crate::{browser, review_form, Session};

enum Details {
    Loading,
    Loaded(Place),
    Failed,
}

pub struct Model {
    place_id: String,
    token: Option<String>,
    details: Details,
    // only logged in visitors get a form
    review_form: Option<review_form::Model>,
}

impl Model {
    pub fn new(place_id: String, session: &Session) -> Self {
        Model {
            review_form: session
                .token
                .clone()
                .map(|token| review_form::Model::new(place_id.clone(), token)),
            place_id,
            token: session.token.clone(),
            details: Details::Loading,
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
            model.details = Details::Loaded(place);
        }

        Msg::Fetched(Err(error)) => {
            log::error!("error fetching place {}: {}", model.place_id, error);
            model.details = Details::Failed;
            browser::alert("Could not load place details.");
        }

        Msg::ReviewForm(msg) => {
            let accepted = match model.review_form.as_mut() {
                Some(form) => review_form::update(msg, form, &mut orders.proxy(Msg::ReviewForm)),
                None => false,
            };
            if accepted {
                fetch(model.token.clone(), model.place_id.clone(), orders);
            }
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    div![
        match &model.details {
            Details::Loading => p![C!["placeholder"], "Loading..."],
            Details::Loaded(place) => render::place_details(place),
            Details::Failed => p![C!["placeholder"], "Could not load place details."],
        },
        model.review_form.as_ref().map(|form| {
            section![
                id!("add-review-section"),
                h3!["Add a Review"],
                review_form::view(form).map_msg(Msg::ReviewForm),
            ]
        }),
    ]
}
