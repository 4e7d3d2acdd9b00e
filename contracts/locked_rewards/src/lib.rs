#![no_std]

mod access;
mod contract;
mod controller;
pub mod errors;
mod events;
mod guard;
mod locked_rewards;
mod math;
mod msg;
mod storage;

pub use crate::contract::{ LockedRewards, LockedRewardsClient };
