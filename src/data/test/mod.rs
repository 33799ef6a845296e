mod gallery;
mod notification;
