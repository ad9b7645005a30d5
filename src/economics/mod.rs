pub mod consumption;

pub use consumption::{
    FoodConsumption, army_support_capacity, calculate_consumption, unsupported_armies,
};
