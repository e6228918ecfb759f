mod activities_tests;
mod associations_tests;
mod calendar_tests;
mod documents_tests;
mod home_tests;
