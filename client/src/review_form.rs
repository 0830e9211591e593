use seed::{prelude::*, *};

use shared::form;

use crate::api::{self, ApiError};
use crate::browser;

const SUBMITTED: &str = "Review submitted successfully!";

pub struct Model {
    place_id: String,
    token: String,
    text: String,
    rating: String,
    pending: bool,
    message: Option<String>,
}

impl Model {
    pub fn new(place_id: String, token: String) -> Self {
        Model {
            place_id,
            token,
            text: String::new(),
            rating: String::new(),
            pending: false,
            message: None,
        }
    }
}

pub enum Msg {
    TextChanged(String),
    RatingChanged(String),
    Submit,
    Answered(Result<(), ApiError>),
}

/// Returns true when the server accepted the review.
pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) -> bool {
    match msg {
        Msg::TextChanged(text) => {
            model.text = text;
        }

        Msg::RatingChanged(rating) => {
            model.rating = rating;
        }

        Msg::Submit => {
            if model.pending {
                orders.skip();
                return false;
            }
            let review = match form::review(Some(&model.place_id), &model.text, &model.rating) {
                Ok(review) => review,
                Err(error) => {
                    browser::alert(&error.to_string());
                    orders.skip();
                    return false;
                }
            };
            log::debug!("submitting review for place {}", review.place_id);
            model.pending = true;
            model.message = None;
            let token = model.token.clone();
            orders.perform_cmd(async move { Msg::Answered(api::submit_review(token, review).await) });
        }

        Msg::Answered(Ok(())) => {
            model.pending = false;
            model.text.clear();
            model.rating.clear();
            model.message = Some(SUBMITTED.to_string());
            return true;
        }

        Msg::Answered(Err(ApiError::Rejected { status, message })) => {
            log::warn!("review rejected with HTTP {}: {}", status, message);
            model.pending = false;
            model.message = Some(message);
        }

        Msg::Answered(Err(error)) => {
            log::error!("error submitting review: {}", error);
            model.pending = false;
            browser::alert("Error while submitting review.");
        }
    }
    false
}

pub fn view(model: &Model) -> Node<Msg> {
    form![
        id!("review-form"),
        ev(Ev::Submit, |event| {
            event.prevent_default();
            Msg::Submit
        }),
        label![attrs! {At::For => "review-text"}, "Your review:"],
        textarea![
            id!("review-text"),
            input_ev(Ev::Input, Msg::TextChanged),
            attrs! {At::Value => model.text},
        ],
        label![attrs! {At::For => "review-rating"}, "Rating:"],
        select![
            id!("review-rating"),
            input_ev(Ev::Change, Msg::RatingChanged),
            option![
                attrs! {
                    At::Value => "",
                    At::Selected => model.rating.is_empty().as_at_value(),
                },
                "Select a rating"
            ],
            (1..=5).map(|rating: u8| {
                let value = rating.to_string();
                option![
                    attrs! {
                        At::Selected => (model.rating == value).as_at_value(),
                        At::Value => value,
                    },
                    format!("{}/5", rating)
                ]
            })
        ],
        button![
            attrs! {
                At::Type => "submit",
                At::Disabled => model.pending.as_at_value(),
            },
            "Submit Review"
        ],
        p![id!("message"), model.message.clone().unwrap_or_default()],
    ]
}
