use seed::{prelude::*, *};

use shared::controller::{self, Effect};
use shared::cookie::TOKEN_COOKIE;
use shared::form::FormError;
use shared::Page;

mod add_review;
mod api;
mod browser;
mod config;
mod cookie;
mod listing;
mod login;
mod place;
mod review_form;
mod view;

/// What every page gets to know about the visitor.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    fn from_cookie() -> Self {
        Session {
            token: cookie::get(TOKEN_COOKIE).filter(|token| !token.is_empty()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

// ------ ------
//     Init
// ------ ------

fn init(url: Url, orders: &mut impl Orders<Msg>) -> Model {
    let session = Session::from_cookie();
    let path = format!("/{}", url.path().join("/"));
    let place_id = url
        .search()
        .get("id")
        .and_then(|values| values.first())
        .map(String::as_str);
    let page = Page::from_location(&path, place_id);
    log::debug!("loading {:?}, token present: {}", page, session.has_token());

    let effects = controller::on_load(&page, session.has_token());
    let redirected = effects
        .iter()
        .any(|effect| matches!(effect, Effect::Navigate(_)));
    let model = Model {
        page: if redirected {
            log::info!("{:?} needs a token", page);
            PageModel::Redirecting
        } else {
            PageModel::new(page, &session)
        },
        session,
    };

    for effect in browser::perform(effects) {
        let token = model.session.token.clone();
        match (effect, &model.page) {
            (Effect::FetchPlaces, PageModel::Listing(_)) => {
                listing::fetch(token, &mut orders.proxy(Msg::Listing));
            }
            (Effect::FetchPlace(id), PageModel::Detail(_)) => {
                place::fetch(token, id, &mut orders.proxy(Msg::Detail));
            }
            (Effect::FetchPlace(id), PageModel::Review(_)) => {
                add_review::fetch(token, id, &mut orders.proxy(Msg::Review));
            }
            (effect, _) => log::warn!("nothing to do for {:?} on this page", effect),
        }
    }
    model
}

// ------ ------
//     Model
// ------ ------

struct Model {
    session: Session,
    page: PageModel,
}

enum PageModel {
    Login(login::Model),
    Listing(listing::Model),
    Detail(place::Model),
    Review(add_review::Model),
    MissingPlace,
    Redirecting,
}

impl PageModel {
    fn new(page: Page, session: &Session) -> Self {
        match page {
            Page::Login => PageModel::Login(login::Model::default()),
            Page::Listing => PageModel::Listing(listing::Model::new(session.has_token())),
            Page::Detail {
                place_id: Some(id),
            } => PageModel::Detail(place::Model::new(id, session)),
            Page::Review {
                place_id: Some(id),
            } => match session.token.clone() {
                Some(token) => PageModel::Review(add_review::Model::new(id, token)),
                None => PageModel::Redirecting,
            },
            Page::Detail { place_id: None } | Page::Review { place_id: None } => {
                PageModel::MissingPlace
            }
        }
    }
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    Logout,
    Login(login::Msg),
    Listing(listing::Msg),
    Detail(place::Msg),
    Review(add_review::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match (msg, &mut model.page) {
        (Msg::Logout, _) => {
            let confirmed = browser::confirm("Are you sure you want to log out?");
            let effects = controller::logout(confirmed);
            if effects.is_empty() {
                orders.skip();
                return;
            }
            model.session.token = None;
            browser::perform(effects);
        }
        (Msg::Login(msg), PageModel::Login(page)) => {
            login::update(msg, page, &mut orders.proxy(Msg::Login));
        }
        (Msg::Listing(msg), PageModel::Listing(page)) => {
            listing::update(msg, page, &mut orders.proxy(Msg::Listing));
        }
        (Msg::Detail(msg), PageModel::Detail(page)) => {
            place::update(msg, page, &mut orders.proxy(Msg::Detail));
        }
        (Msg::Review(msg), PageModel::Review(page)) => {
            add_review::update(msg, page, &mut orders.proxy(Msg::Review));
        }
        _ => {
            log::debug!("message for a page that is not shown");
            orders.skip();
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl IntoNodes<Msg> {
    div![
        C!["container"],
        nav_bar(&model.session),
        main![match &model.page {
            PageModel::Login(page) => login::view(page).map_msg(Msg::Login),
            PageModel::Listing(page) => listing::view(page).map_msg(Msg::Listing),
            PageModel::Detail(page) => place::view(page).map_msg(Msg::Detail),
            PageModel::Review(page) => add_review::view(page).map_msg(Msg::Review),
            PageModel::MissingPlace => p![
                C!["placeholder"],
                FormError::MissingPlaceId.to_string()
            ],
            PageModel::Redirecting => empty![],
        }],
    ]
}

fn nav_bar(session: &Session) -> Node<Msg> {
    header![nav![
        a![
            C!["logo"],
            attrs! {At::Href => Page::Listing.href()},
            "HBnB"
        ],
        if session.has_token() {
            button![
                id!("logout-button"),
                C!["logout-button"],
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::Logout
                }),
                "Logout"
            ]
        } else {
            a![
                id!("login-button"),
                C!["login-button"],
                attrs! {At::Href => Page::Login.href()},
                "Login"
            ]
        }
    ]]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    App::start("app", init, update, view);
}
