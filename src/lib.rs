use mongodb::Database;

pub mod config;
pub mod error;
pub mod modules;
pub mod services;

pub use error::AppError;

use config::settings::Settings;
use modules::reservation::crud::ReservationCrud;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub settings: Settings,
}

impl AppState {
    pub async fn connect(settings: Settings) -> Result<Self, AppError> {
        let db = config::database::connect(&settings).await?;
        Ok(Self { db, settings })
    }

    pub fn reservations(&self) -> ReservationCrud {
        ReservationCrud::new(&self.db, &self.settings.collection)
    }
}
