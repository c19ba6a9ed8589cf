pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod iso_week;
        pub mod timestamp;
    }
    pub mod infrastructure {
        pub mod resource_cache;
    }
}

pub mod modules {
    pub mod schedule {
        pub mod core {
            pub mod grouping;
            pub mod projector;
            pub mod records;
            pub mod tag_key;
            pub mod tag_meta;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod list_available_weeks {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_weekly_plan {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_tag_catalog {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod reload_metadata {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod mock_api_http;
            }
            pub mod outbound {
                pub mod metadata_store;
                pub mod schedule_api;
                pub mod schedule_api_http;
                pub mod schedule_api_in_memory;
            }
        }
    }
}

pub mod shell;
