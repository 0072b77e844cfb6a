mod bindings;

pub use bindings::{
    CART_KEY, PORTFOLIO_COLLECTION, TODO_KEY, cart_store, experiences_store, merge_profile,
    projects_store, skills_store, todo_store,
};
