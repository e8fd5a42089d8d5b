use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SummaryFooterProps {
  pub footer: Option<String>
}

#[function_component(SummaryFooter)]
pub fn summary_footer(
  props: &SummaryFooterProps
) -> Html {
  let Some(footer) = props.footer.as_ref()
  else {
    return html! {};
  };

  html! {
      <div class="footer">
          <p>{ footer }</p>
      </div>
  }
}
