mod breadcrumbs;
mod currency;

pub use breadcrumbs::breadcrumb_trail;
pub use currency::currency_field;
