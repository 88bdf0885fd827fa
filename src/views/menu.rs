//! Profile menu

use serde::Serialize;

use crate::constants::{routes, DEFAULT_AVATAR_URL};
use crate::models::SessionUser;
use crate::services::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuItem {
    ProblemList,
    Submissions,
    Profile,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::ProblemList,
        MenuItem::Submissions,
        MenuItem::Profile,
        MenuItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProblemList => "Problem List",
            Self::Submissions => "Submissions",
            Self::Profile => "Profile",
            Self::Logout => "Logout",
        }
    }

    /// Where the router should go after the item is chosen
    pub fn route(&self) -> &'static str {
        match self {
            Self::ProblemList => routes::PROBLEM_LIST,
            Self::Submissions => routes::SUBMISSIONS,
            Self::Profile => routes::PROFILE,
            Self::Logout => routes::LOGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub image_url: String,
    /// Shown when the image cannot be loaded
    pub fallback: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileMenu {
    pub label: String,
    pub avatar: Avatar,
    pub items: [MenuItem; 4],
}

impl ProfileMenu {
    pub fn for_user(user: Option<&SessionUser>) -> Self {
        let name = user
            .and_then(|u| u.name.as_deref())
            .filter(|n| !n.is_empty());

        let image_url = user
            .and_then(|u| u.photo_url.clone())
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string());

        let fallback = name
            .and_then(|n| n.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U');

        Self {
            label: name.unwrap_or("My Account").to_string(),
            avatar: Avatar {
                image_url,
                fallback,
            },
            items: MenuItem::ALL,
        }
    }

    /// Activate an item and return the route to navigate to
    pub fn select(&self, item: MenuItem, session: &dyn SessionProvider) -> &'static str {
        if item == MenuItem::Logout {
            session.logout();
        }
        item.route()
    }
}
