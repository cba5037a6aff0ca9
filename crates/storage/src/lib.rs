#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod backend;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod record;

#[cfg(test)]
mod tests {
    pub mod data;
}
