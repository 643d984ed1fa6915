mod stocks;
mod users;

pub use stocks::StockStore;
pub use users::{InMemoryUserStore, UserStore, UserStoreError};
