use seed::{prelude::*, *};

use shared::api::LoginResponse;
use shared::controller::{self, Effect, LoginOutcome};
use shared::form;

use crate::api::{self, ApiError};
use crate::browser;

#[derive(Default)]
pub struct Model {
    email: String,
    password: String,
    error: Option<String>,
    pending: bool,
}

pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Answered(Result<LoginResponse, ApiError>),
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::EmailChanged(email) => {
            model.email = email;
        }

        Msg::PasswordChanged(password) => {
            model.password = password;
        }

        Msg::Submit => {
            if model.pending {
                orders.skip();
                return;
            }
            let credentials = match form::login(&model.email, &model.password) {
                Ok(credentials) => credentials,
                Err(error) => {
                    browser::alert(&error.to_string());
                    orders.skip();
                    return;
                }
            };
            model.error = None;
            model.pending = true;
            orders.perform_cmd(async move { Msg::Answered(api::login(credentials).await) });
        }

        Msg::Answered(answer) => {
            model.pending = false;
            let outcome = match answer {
                Ok(response) => {
                    log::info!("logged in as {}", model.email);
                    LoginOutcome::Accepted(response)
                }
                Err(ApiError::Rejected { status, message }) => {
                    log::warn!("login rejected with HTTP {}", status);
                    LoginOutcome::Rejected(message)
                }
                Err(error) => {
                    log::error!("login request failed: {}", error);
                    LoginOutcome::Unreachable
                }
            };
            for effect in browser::perform(controller::after_login(outcome)) {
                if let Effect::ShowError(message) = effect {
                    model.password.clear();
                    model.error = Some(message);
                }
            }
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    section![
        C!["login-section"],
        h2!["Login"],
        form![
            id!("login-form"),
            ev(Ev::Submit, |event| {
                event.prevent_default();
                Msg::Submit
            }),
            label![attrs! {At::For => "email"}, "Email"],
            input![
                id!("email"),
                input_ev(Ev::Input, Msg::EmailChanged),
                attrs! {
                    At::Type => "email",
                    At::Value => model.email,
                    At::AutoFocus => AtValue::None,
                },
            ],
            label![attrs! {At::For => "password"}, "Password"],
            input![
                id!("password"),
                input_ev(Ev::Input, Msg::PasswordChanged),
                attrs! {
                    At::Type => "password",
                    At::Value => model.password,
                },
            ],
            button![
                C!["login-button"],
                attrs! {
                    At::Type => "submit",
                    At::Disabled => model.pending.as_at_value(),
                },
                "Login"
            ],
        ],
        p![
            id!("error-message"),
            model.error.clone().unwrap_or_default()
        ],
    ]
}
