mod health_check;
mod helpers;
mod test_email;
