mod capture;
mod event;
mod support;
