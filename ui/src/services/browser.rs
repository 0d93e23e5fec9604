//! Narrow handles on the browser and router used by the login controller

use std::fmt::Display;
use std::marker::PhantomData;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use tracing::{error, info};

/// Blocking user-facing alert
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Client-side navigation to an application path
pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

/// Runs a future on the UI event loop
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// `window.alert`
#[derive(Clone, Copy, Default)]
pub struct WindowAlert;

impl Alert for WindowAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    error!("Failed to show alert: {:?}", e);
                }
            }
            None => error!("No window available to show alert: {}", message),
        }
    }
}

/// Navigates through the Dioxus router, parsing paths into the app's route type
pub struct RouterNavigator<R> {
    navigator: Navigator,
    _route: PhantomData<R>,
}

impl<R> RouterNavigator<R> {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            _route: PhantomData,
        }
    }
}

impl<R> Navigate for RouterNavigator<R>
where
    R: Routable,
    <R as std::str::FromStr>::Err: Display,
{
    fn navigate_to(&self, path: &str) {
        match path.parse::<R>() {
            Ok(route) => {
                info!("Navigating to {}", path);
                self.navigator.push(route);
            }
            Err(e) => error!("Cannot navigate to unknown route {}: {}", path, e),
        }
    }
}

/// Shared navigator that can travel through component props
#[derive(Clone)]
pub struct NavigateHandle(pub Rc<dyn Navigate>);

impl NavigateHandle {
    pub fn new(navigate: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigate))
    }
}

impl PartialEq for NavigateHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Spawner backed by the Dioxus runtime of the calling component
pub fn dioxus_spawner() -> Spawner {
    Rc::new(|task| {
        spawn(task);
    })
}
