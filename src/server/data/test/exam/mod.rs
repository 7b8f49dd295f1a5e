use crate::server::data::exam::ExamRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers::date};

mod get_all;
