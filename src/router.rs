//! Static route table and path resolution.
//!
//! DESIGN
//! ======
//! Routing is a pure function of `(path, session)`: [`resolve`] finds the
//! matching [`RouteDef`], applies the guard when the route is protected, and
//! yields either the view to render or a redirect.
//!
//! Segments are tested with `leptos_router`'s `StaticSegment` and
//! `ParamSegment`, the same types `App` declares its `<Route>`s with. Query
//! string and fragment are ignored, one trailing slash is tolerated, static
//! segments are case-sensitive, and parameter segments must be non-empty.
//! Anything unmatched renders the not-found view, whatever the session.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::borrow::Cow;

use leptos_router::{ParamSegment, PartialPathMatch, PossibleRouteMatch, StaticSegment};

use self::Segment::{Param, Static};
use crate::state::session::Session;
use crate::util::auth::{Guarded, guard};

/// Every screen the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Login,
    Signup,
    Dashboard,
    AllLeaves,
    LeaveRequest,
    EditEmployee,
    Profile,
    ApproveLeave,
    NotFound,
}

/// One piece of a route path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Static(&'static str),
    Param(&'static str),
}

impl Segment {
    fn test<'a>(self, path: &'a str) -> Option<PartialPathMatch<'a>> {
        match self {
            Self::Static(name) => StaticSegment(name).test(path),
            Self::Param(name) => ParamSegment(name).test(path),
        }
    }
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub segments: &'static [Segment],
    pub view: ViewKind,
    pub guarded: bool,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { segments: &[Static("login")], view: ViewKind::Login, guarded: false },
    RouteDef { segments: &[Static("signup")], view: ViewKind::Signup, guarded: false },
    RouteDef { segments: &[], view: ViewKind::Dashboard, guarded: true },
    RouteDef { segments: &[Static("leave-page")], view: ViewKind::AllLeaves, guarded: true },
    RouteDef { segments: &[Static("ask-for-leave"), Param("userId")], view: ViewKind::LeaveRequest, guarded: true },
    RouteDef { segments: &[Static("edit"), Param("userId")], view: ViewKind::EditEmployee, guarded: true },
    RouteDef { segments: &[Static("profile"), Param("userId")], view: ViewKind::Profile, guarded: true },
    RouteDef { segments: &[Static("approve-leave")], view: ViewKind::ApproveLeave, guarded: true },
];

/// Captured path parameters, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(Cow<'static, str>, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The view a path resolved to, with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewKind,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn not_found() -> Self {
        Self {
            view: ViewKind::NotFound,
            params: RouteParams::default(),
        }
    }

    /// The `{userId}` parameter, or an empty string for routes without one.
    pub fn user_id(&self) -> String {
        self.params.get("userId").unwrap_or_default().to_owned()
    }
}

pub type Resolution = Guarded<RouteMatch>;

/// Resolve `path` for `session`: exactly one view, or the guard's redirect.
pub fn resolve(path: &str, session: &Session) -> Resolution {
    match match_route(path) {
        Some((def, params)) => {
            let route = RouteMatch { view: def.view, params };
            if def.guarded {
                guard(session, route)
            } else {
                Guarded::Render(route)
            }
        }
        None => Guarded::Render(RouteMatch::not_found()),
    }
}

/// First route whose pattern matches `path`, with the captured parameters.
pub fn match_route(path: &str) -> Option<(&'static RouteDef, RouteParams)> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES
        .iter()
        .find_map(|def| match_segments(def.segments, path).map(|params| (def, params)))
}

fn match_segments(segments: &[Segment], path: &str) -> Option<RouteParams> {
    let mut rest = path;
    let mut params = Vec::new();
    for segment in segments {
        let matched = segment.test(rest)?;
        rest = matched.remaining();
        params.extend(matched.params());
    }
    (rest.is_empty() || rest == "/").then_some(RouteParams(params))
}

pub fn ask_for_leave_path(user_id: &str) -> String {
    format!("/ask-for-leave/{user_id}")
}

pub fn edit_path(user_id: &str) -> String {
    format!("/edit/{user_id}")
}

pub fn profile_path(user_id: &str) -> String {
    format!("/profile/{user_id}")
}
