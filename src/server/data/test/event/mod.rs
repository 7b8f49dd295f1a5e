use crate::server::data::event::EventRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::date};

mod get_all;
