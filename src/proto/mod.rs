// Generated proto modules will be included here after build
// Run `cargo build` to generate the proto code

pub mod common {
    include!("boxed.common.rs");
}

pub mod boxes {
    include!("boxed.boxes.rs");
}

pub mod items {
    include!("boxed.items.rs");
}

pub mod item_photos {
    include!("boxed.item_photos.rs");
}

pub mod export {
    include!("boxed.export.rs");
}

pub mod health {
    include!("boxed.health.rs");
}
