mod access;
mod capture;
mod combinators;
