pub mod shared {
    pub mod config;
}

pub mod modules {
    pub mod quizzes {
        pub mod core {
            pub mod errors;
            pub mod ports;
            pub mod question;
            pub mod question_store;
            pub mod quiz;
            pub mod quiz_book;
            pub mod quiz_store;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod manage_quizzes {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod browse_quizzes {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_questions {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod clear_catalog {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod error_response;
            }
            pub mod outbound {
                pub mod in_memory_catalog;
            }
        }
    }
}

pub mod shell;
