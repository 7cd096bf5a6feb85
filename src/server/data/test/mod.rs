mod account;
mod guild;
mod role_assignment;
