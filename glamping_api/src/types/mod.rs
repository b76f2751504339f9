mod meta;
pub use self::meta::{MutationResponse, Resource, ResourcePage};

mod catalog;
pub use self::catalog::{CustomPrice, Experience, Glamping, Product, ResourceStatus};

mod user;
pub use self::user::{Role, Session, SignInRequest, User};

mod promotion;
pub use self::promotion::{DiscountCode, ExperienceItem, GlampingItem, ProductItem, Promotion};

mod reserve;
pub use self::reserve::{PaymentStatus, Reserve, ReserveStatus};

mod content;
pub use self::content::{Faq, Review};

mod statistics;
pub use self::statistics::{QuantityPoint, SalesPoint, StatisticsStep, StatisticsType};

mod chat;
pub use self::chat::{ChatEvent, SUPPORT_CHANNEL};
