mod attendance;
mod event;
mod exam;
mod grade;
mod payment;
