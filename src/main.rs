mod app_router;
mod app_runtime;
mod gallery;
mod live_state;
mod login;
mod spinner;
mod tile;
mod toast;
mod yew_app;

fn main() {
    yew_app::run();
}
