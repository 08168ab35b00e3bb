//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    history::HistoryPage, home::HomePage, liked::LikedPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, upload::UploadPage, watch::WatchPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, keeps it in step with the session
/// hub, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Prime auth from whatever the hub restored, then mirror every later
    // establish/clear into the reactive world.
    let auth = RwSignal::new(AuthState {
        session: crate::session::current(),
    });
    provide_context(auth);

    let bridge = crate::session::subscribe(move || {
        auth.set(AuthState {
            session: crate::session::current(),
        });
    });
    on_cleanup(move || crate::session::unsubscribe(bridge));

    view! {
        <Stylesheet id="leptos" href="/pkg/videostream.css"/>
        <Title text="VideoStream"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("video"), ParamSegment("id")) view=WatchPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("liked") view=LikedPage/>
                </Routes>
            </main>
        </Router>
    }
}
