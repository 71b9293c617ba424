pub mod shared {
    pub mod infrastructure {
        pub mod memo_store;
    }
}

pub mod modules {
    pub mod memos {
        pub mod core {
            pub mod decision;
            pub mod memo;
            pub mod memo_text;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_memos {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_memo {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_memo {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_memo {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
}

pub mod shell;
