// profile-core/profile-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use mock_app_dependencies::MockAppDependencies;


pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_reference_date as reference_date, mock_user_id as user_id,
    };
}

#[macro_export]
macro_rules! user_id {
    ($id:expr) => {
        $id.parse::<$crate::dtos::UserId>().unwrap()
    };
}
