mod callback_state;
mod credential;
