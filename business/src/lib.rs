pub mod application {
    pub mod humanizer {
        pub mod humanize;
    }
}

pub mod domain {
    pub mod logger;
    pub mod humanizer {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod humanize;
        }
    }
}
